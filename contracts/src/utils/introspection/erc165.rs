//! Trait of the ERC-165 standard, as defined in the [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-165

use alloy_primitives::aliases::B32;
use stylus_ownership_proc::interface_id;

/// Interface of the ERC-165 standard, as defined in the [ERC].
///
/// Implementers declare support of contract interfaces, which others can
/// query. Each contract in this crate answers for the interface ids of the
/// traits it implements:
///
/// ```rust,ignore
/// #[public]
/// impl IErc165 for Ownable {
///     fn supports_interface(&self, interface_id: B32) -> bool {
///         <Self as IOwnable>::interface_id() == interface_id
///             || <Self as IErc165>::interface_id() == interface_id
///     }
/// }
/// ```
///
/// [ERC]: https://eips.ethereum.org/EIPS/eip-165
#[interface_id]
pub trait IErc165 {
    /// Returns true if this contract implements the interface defined by
    /// `interface_id`. See the corresponding [ERC] to learn more about how
    /// these ids are created.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `interface_id` - The interface identifier, as specified in the
    ///   [ERC].
    ///
    /// [ERC]: https://eips.ethereum.org/EIPS/eip-165#how-interfaces-are-identified
    #[must_use]
    fn supports_interface(&self, interface_id: B32) -> bool;
}

#[cfg(test)]
mod tests {
    use alloy_primitives::aliases::B32;

    use super::IErc165;

    struct Erc165Example;

    impl IErc165 for Erc165Example {
        fn supports_interface(&self, interface_id: B32) -> bool {
            <Self as IErc165>::interface_id() == interface_id
        }
    }

    #[test]
    fn interface_id_matches_the_erc() {
        // The id mandated by ERC-165 for `supportsInterface(bytes4)`.
        assert_eq!(<Erc165Example as IErc165>::INTERFACE_ID, 0x01ff_c9a7_u32);
    }

    #[test]
    fn own_id_is_supported() {
        let contract = Erc165Example;
        assert!(contract
            .supports_interface(<Erc165Example as IErc165>::interface_id()));

        let fake_interface_id: B32 = 0x12345678_u32.into();
        assert!(!contract.supports_interface(fake_interface_id));
    }
}

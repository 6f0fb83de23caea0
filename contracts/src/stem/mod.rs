//! The emergency "stem" implementation.
//!
//! Upgrading a misbehaving contract's proxy to [`Stem`] pauses it: the stem
//! implements nothing but ownership recovery, so every selector of the
//! previous implementation reverts with [`Stemmed`], while the proxy's
//! persistent state (balances and the rest) survives untouched outside the
//! ownership slots. Recovery reuses the time-flip schedule of
//! [`FixedOwnable`]: the party that installed the stem stays in control
//! until a preset delay elapses, after which a fixed emergency owner takes
//! over without any transaction.
//!
//! Unstemming is another upgrade, authorized by whoever owns the stem at
//! that moment. Because that authorization is the stem owner's, swapping in
//! a new implementation *and* handing it to a different owner cannot happen
//! in one transaction: the new implementation starts under the upgrader's
//! control and must transfer ownership in a separate call.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{
    abi::Bytes,
    block,
    call::{self, Call, MethodError},
    evm, msg,
    prelude::*,
    ArbResult,
};

use crate::{
    access::fixed_ownable::{
        self, FixedOwnable, FixedOwnableInvalidOwner,
        FixedOwnableUnauthorizedAccount,
    },
    utils::{introspection::erc165::IErc165, slots::ImplementationSlot},
};

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the implementation behind the proxy is upgraded.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Upgraded(address indexed implementation);
    }

    sol! {
        /// The contract is stemmed: only ownership recovery is available.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error Stemmed();
        /// The proposed implementation has no code.
        ///
        /// * `implementation` - Address of the invalid implementation.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error StemInvalidImplementation(address implementation);
        /// The upgrade carried value but no setup call to receive it.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error StemNonPayable();
        /// The setup call on the new implementation reverted.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error StemSetupFailed();
    }
}

/// An error that occurred in the implementation of a [`Stem`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(FixedOwnableUnauthorizedAccount),
    /// The owner is not a valid owner account.
    InvalidOwner(FixedOwnableInvalidOwner),
    /// The contract is stemmed.
    Stemmed(Stemmed),
    /// The proposed implementation has no code.
    InvalidImplementation(StemInvalidImplementation),
    /// The upgrade carried value but no setup call to receive it.
    NonPayable(StemNonPayable),
    /// The setup call on the new implementation reverted.
    SetupFailed(StemSetupFailed),
}

impl From<fixed_ownable::Error> for Error {
    fn from(value: fixed_ownable::Error) -> Self {
        match value {
            fixed_ownable::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            fixed_ownable::Error::InvalidOwner(e) => Error::InvalidOwner(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`Stem`] contract.
#[storage]
pub struct Stem {
    /// The time-flip recovery schedule.
    pub(crate) fixed: FixedOwnable,
    /// The proxy's implementation pointer.
    pub(crate) implementation: ImplementationSlot,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self`
/// when calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for Stem {}

/// Interface of a [`Stem`] contract.
#[interface_id]
pub trait IStem {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Returns the address of the current owner: the installer until the
    /// recovery delay elapses, the emergency owner from then on.
    #[must_use]
    fn owner(&self) -> Address;

    /// Returns the emergency owner the stem hands over to.
    #[must_use]
    fn emergency_owner(&self) -> Address;

    /// Returns the timestamp at which the emergency owner takes over.
    #[must_use]
    fn activates_at(&self) -> u64;

    /// Returns the implementation address currently behind the proxy.
    #[must_use]
    fn implementation(&self) -> Address;

    /// Unstems the contract: points the proxy at `new_implementation` and,
    /// when `data` is non-empty, runs a delegate setup call on it. Can only
    /// be called by the current (time-computed) owner.
    ///
    /// The new implementation starts out controlled by whoever authorized
    /// this call; moving it to a different owner takes a separate,
    /// subsequent transfer on the new implementation.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `new_implementation` - The implementation to install.
    /// * `data` - Optional setup calldata to delegate to it.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If not called by the owner.
    /// * [`Error::InvalidImplementation`] - If `new_implementation` has no
    ///   code.
    /// * [`Error::SetupFailed`] - If the setup call reverts.
    /// * [`Error::NonPayable`] - If value is attached without setup data.
    ///
    /// # Events
    ///
    /// * [`Upgraded`].
    #[selector(name = "upgradeToAndCall")]
    fn upgrade_to_and_call(
        &mut self,
        new_implementation: Address,
        data: Bytes,
    ) -> Result<(), Self::Error>;
}

#[public]
#[implements(IStem<Error = Error>, IErc165)]
impl Stem {
    /// Constructor.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `before_owner` - Owner while the stem settles; the deployer when
    ///   zero.
    /// * `emergency_owner` - Owner once `delay` elapses.
    /// * `delay` - Seconds before the emergency owner takes over.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `emergency_owner` is
    ///   [`Address::ZERO`].
    #[constructor]
    pub fn constructor(
        &mut self,
        before_owner: Address,
        emergency_owner: Address,
        delay: u64,
    ) -> Result<(), Error> {
        let activate_at = block::timestamp() + delay;
        self.fixed._init(before_owner, emergency_owner, activate_at)?;
        Ok(())
    }

    /// Every selector outside the recovery surface is refused while the
    /// stem is installed.
    #[fallback]
    pub fn fallback(&mut self, _calldata: &[u8]) -> ArbResult {
        Err(Error::Stemmed(Stemmed {}).into())
    }
}

#[public]
impl IStem for Stem {
    type Error = Error;

    fn owner(&self) -> Address {
        self.fixed.owner()
    }

    fn emergency_owner(&self) -> Address {
        self.fixed.after_owner.get()
    }

    fn activates_at(&self) -> u64 {
        self.fixed.transfer_at.get().to::<u64>()
    }

    fn implementation(&self) -> Address {
        self.implementation.get()
    }

    #[selector(name = "upgradeToAndCall")]
    #[payable]
    fn upgrade_to_and_call(
        &mut self,
        new_implementation: Address,
        data: Bytes,
    ) -> Result<(), Self::Error> {
        self.fixed.only_owner()?;

        if !new_implementation.has_code() {
            return Err(Error::InvalidImplementation(
                StemInvalidImplementation {
                    implementation: new_implementation,
                },
            ));
        }

        self.implementation.set(new_implementation);
        evm::log(Upgraded { implementation: new_implementation });

        if data.len() > 0 {
            unsafe {
                call::delegate_call(
                    Call::new_in(self),
                    new_implementation,
                    data.as_slice(),
                )
                .map_err(|_| Error::SetupFailed(StemSetupFailed {}))?;
            }
        } else if !msg::value().is_zero() {
            // Reject stray value that no setup call can claim.
            return Err(Error::NonPayable(StemNonPayable {}));
        }

        Ok(())
    }
}

#[public]
impl IErc165 for Stem {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IStem>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U64;
    use motsu::prelude::*;
    use stylus_sdk::{alloy_primitives::Address, block, prelude::*};

    use super::*;
    use crate::utils::introspection::erc165::IErc165;

    const DELAY: u64 = 7 * 24 * 60 * 60;

    impl Stem {
        /// Moves the recovery flip `secs` into the past.
        fn elapse(&mut self, secs: u64) {
            let at = self.fixed.transfer_at.get();
            self.fixed.transfer_at.set(at - U64::from(secs));
        }
    }

    #[motsu::test]
    fn installer_owns_until_the_delay(
        contract: Contract<Stem>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, bob, DELAY)
            .motsu_unwrap();

        assert_eq!(contract.sender(alice).owner(), alice);
        assert_eq!(contract.sender(alice).emergency_owner(), bob);
        assert_eq!(
            contract.sender(alice).activates_at(),
            block::timestamp() + DELAY
        );
    }

    #[motsu::test]
    fn emergency_owner_takes_over(
        contract: Contract<Stem>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, bob, DELAY)
            .motsu_unwrap();
        contract.sender(alice).elapse(DELAY);

        assert_eq!(contract.sender(alice).owner(), bob);
    }

    #[motsu::test]
    fn rejects_zero_emergency_owner(
        contract: Contract<Stem>,
        alice: Address,
    ) {
        let err = contract
            .sender(alice)
            .constructor(Address::ZERO, Address::ZERO, DELAY)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::InvalidOwner(_)));
    }

    #[motsu::test]
    fn everything_else_is_stemmed(contract: Contract<Stem>, alice: Address) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, alice, DELAY)
            .motsu_unwrap();

        // Whatever selector the previous implementation had, it now lands
        // in the fallback.
        let res = contract.sender(alice).fallback(&[0xab, 0xcd, 0xef, 0x01]);
        let expected: Vec<u8> = Error::Stemmed(Stemmed {}).into();
        assert_eq!(res.unwrap_err(), expected);
    }

    #[motsu::test]
    fn only_owner_unstems(
        contract: Contract<Stem>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, bob, DELAY)
            .motsu_unwrap();

        let err = contract
            .sender(charlie)
            .upgrade_to_and_call(charlie, vec![].into())
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(FixedOwnableUnauthorizedAccount {
                account,
            }) if account == charlie
        ));

        // Before the delay the emergency owner cannot unstem either.
        let err = contract
            .sender(bob)
            .upgrade_to_and_call(charlie, vec![].into())
            .motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));
    }

    #[motsu::test]
    fn unstem_authority_follows_the_flip(
        contract: Contract<Stem>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, bob, DELAY)
            .motsu_unwrap();
        contract.sender(alice).elapse(DELAY);

        let err = contract
            .sender(alice)
            .upgrade_to_and_call(alice, vec![].into())
            .motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));
    }

    #[motsu::test]
    fn rejects_codeless_implementation(
        contract: Contract<Stem>,
        alice: Address,
        bob: Address,
    ) {
        contract
            .sender(alice)
            .constructor(Address::ZERO, bob, DELAY)
            .motsu_unwrap();

        // An externally owned account is not an implementation.
        let err = contract
            .sender(alice)
            .upgrade_to_and_call(bob, vec![].into())
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidImplementation(StemInvalidImplementation {
                implementation,
            }) if implementation == bob
        ));
        assert_eq!(contract.sender(alice).implementation(), Address::ZERO);
    }

    #[motsu::test]
    fn supports_interface(contract: Contract<Stem>, alice: Address) {
        assert!(contract
            .sender(alice)
            .supports_interface(<Stem as IStem>::interface_id()));
        assert!(contract
            .sender(alice)
            .supports_interface(<Stem as IErc165>::interface_id()));

        let fake_interface_id: B32 = 0x12345678_u32.into();
        assert!(!contract.sender(alice).supports_interface(fake_interface_id));
    }
}

//! Owner-gated rescue of assets stranded on a contract.
//!
//! Contracts accumulate dust: tokens sent by mistake, native value left
//! behind by selfdestructs or coinbase payments. [`TokenHolder`] lets the
//! owner, and only the owner, sweep those balances out to a receiver of
//! their choice. It is a thin utility over the embedded
//! [`Ownable`] core, not a token implementation.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U256};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{
    call::{call, Call, MethodError},
    evm,
    prelude::*,
};

use crate::{
    access::ownable::{
        self, IOwnable, Ownable, OwnableAlreadyInitialized,
        OwnableCannotCompleteTransfer, OwnableCannotRenounceYet,
        OwnableUnauthorizedAccount,
    },
    utils::introspection::erc165::IErc165,
};

mod interface {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]

    use alloc::vec;

    use stylus_sdk::prelude::sol_interface;
    sol_interface! {
        interface Erc20Interface {
            function transfer(address to, uint256 value) external returns (bool);
        }
    }
}

pub use interface::Erc20Interface;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `amount` of `token` has been swept to `receiver`.
        /// `token` is the zero address for native value.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event Swept(address indexed token, address indexed receiver, uint256 amount);
    }

    sol! {
        /// The token address is not valid. (eg. [`Address::ZERO`])
        ///
        /// * `token` - Address of the token being swept.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TokenHolderInvalidToken(address token);
        /// The receiver address is not valid. (eg. [`Address::ZERO`])
        ///
        /// * `receiver` - Address the sweep was directed to.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TokenHolderInvalidReceiver(address receiver);
        /// A sweep of zero amount is meaningless and refused.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TokenHolderZeroAmount();
        /// The transfer out failed or reported failure.
        ///
        /// * `token` - Asset being swept; zero address for native value.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error TokenHolderSweepFailed(address token);
    }
}

/// An error that occurred in the implementation of a [`TokenHolder`]
/// contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not authorized to perform an operation.
    UnauthorizedAccount(OwnableUnauthorizedAccount),
    /// The contract has already been initialized.
    AlreadyInitialized(OwnableAlreadyInitialized),
    /// No live pending transition authorizes the requested transfer.
    CannotCompleteTransfer(OwnableCannotCompleteTransfer),
    /// The cool-down of a pending renunciation has not elapsed yet.
    CannotRenounceYet(OwnableCannotRenounceYet),
    /// The token address is not valid.
    InvalidToken(TokenHolderInvalidToken),
    /// The receiver address is not valid.
    InvalidReceiver(TokenHolderInvalidReceiver),
    /// A sweep of zero amount is meaningless and refused.
    ZeroAmount(TokenHolderZeroAmount),
    /// The transfer out failed or reported failure.
    SweepFailed(TokenHolderSweepFailed),
}

impl From<ownable::Error> for Error {
    fn from(value: ownable::Error) -> Self {
        match value {
            ownable::Error::UnauthorizedAccount(e) => {
                Error::UnauthorizedAccount(e)
            }
            ownable::Error::AlreadyInitialized(e) => {
                Error::AlreadyInitialized(e)
            }
            ownable::Error::CannotCompleteTransfer(e) => {
                Error::CannotCompleteTransfer(e)
            }
            ownable::Error::CannotRenounceYet(e) => Error::CannotRenounceYet(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`TokenHolder`] contract.
#[storage]
pub struct TokenHolder {
    /// The embedded ownership core.
    // Left public so that embedding contracts have access to the internal
    // gates and transition machinery.
    pub ownable: Ownable,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self`
/// when calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for TokenHolder {}

/// Interface of the sweep extension.
#[interface_id]
pub trait ITokenHolder {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Sweeps `amount` of `token` to `receiver`. Can only be called by the
    /// current owner.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `token` - The ERC-20 token to sweep.
    /// * `receiver` - Where to send the swept tokens.
    /// * `amount` - How much to sweep.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    /// * [`Error::InvalidToken`] - If `token` is the zero address.
    /// * [`Error::InvalidReceiver`] - If `receiver` is the zero address.
    /// * [`Error::ZeroAmount`] - If `amount` is zero.
    /// * [`Error::SweepFailed`] - If the token transfer reverts or returns
    ///   `false`.
    ///
    /// # Events
    ///
    /// * [`Swept`].
    fn sweep_token(
        &mut self,
        token: Address,
        receiver: Address,
        amount: U256,
    ) -> Result<(), Self::Error>;

    /// Sweeps `amount` of native value to `receiver`. Can only be called
    /// by the current owner.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `receiver` - Where to send the swept value.
    /// * `amount` - How much to sweep.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    /// * [`Error::InvalidReceiver`] - If `receiver` is the zero address.
    /// * [`Error::ZeroAmount`] - If `amount` is zero.
    /// * [`Error::SweepFailed`] - If the value transfer fails.
    ///
    /// # Events
    ///
    /// * [`Swept`].
    fn sweep_native(
        &mut self,
        receiver: Address,
        amount: U256,
    ) -> Result<(), Self::Error>;
}

#[public]
#[implements(IOwnable<Error = Error>, ITokenHolder<Error = Error>, IErc165)]
impl TokenHolder {}

#[public]
impl IOwnable for TokenHolder {
    type Error = Error;

    fn initialize(&mut self, final_owner: Address) -> Result<(), Self::Error> {
        Ok(self.ownable.initialize(final_owner)?)
    }

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        confirm_owner: Address,
    ) -> Result<(), Self::Error> {
        Ok(self.ownable.transfer_ownership(confirm_owner)?)
    }

    fn pending(&self) -> (Address, u64, bool, u64) {
        self.ownable.pending()
    }
}

#[public]
impl ITokenHolder for TokenHolder {
    type Error = Error;

    fn sweep_token(
        &mut self,
        token: Address,
        receiver: Address,
        amount: U256,
    ) -> Result<(), Self::Error> {
        self.ownable.only_owner()?;
        if token.is_zero() {
            return Err(Error::InvalidToken(TokenHolderInvalidToken {
                token,
            }));
        }
        Self::check_sweep_args(receiver, amount)?;

        let erc20 = Erc20Interface::new(token);
        let ok = erc20
            .transfer(Call::new_in(self), receiver, amount)
            .map_err(|_| {
                Error::SweepFailed(TokenHolderSweepFailed { token })
            })?;
        if !ok {
            return Err(Error::SweepFailed(TokenHolderSweepFailed { token }));
        }

        evm::log(Swept { token, receiver, amount });
        Ok(())
    }

    fn sweep_native(
        &mut self,
        receiver: Address,
        amount: U256,
    ) -> Result<(), Self::Error> {
        self.ownable.only_owner()?;
        Self::check_sweep_args(receiver, amount)?;

        call(Call::new_in(self).value(amount), receiver, &[]).map_err(
            |_| {
                Error::SweepFailed(TokenHolderSweepFailed {
                    token: Address::ZERO,
                })
            },
        )?;

        evm::log(Swept { token: Address::ZERO, receiver, amount });
        Ok(())
    }
}

impl TokenHolder {
    /// Validates the receiver and amount shared by both sweep flavors.
    fn check_sweep_args(receiver: Address, amount: U256) -> Result<(), Error> {
        if receiver.is_zero() {
            return Err(Error::InvalidReceiver(TokenHolderInvalidReceiver {
                receiver,
            }));
        }
        if amount.is_zero() {
            return Err(Error::ZeroAmount(TokenHolderZeroAmount {}));
        }
        Ok(())
    }
}

#[public]
impl IErc165 for TokenHolder {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IOwnable>::interface_id() == interface_id
            || <Self as ITokenHolder>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::uint;
    use motsu::prelude::*;
    use stylus_sdk::alloy_primitives::Address;

    use super::*;
    use crate::utils::introspection::erc165::IErc165;

    fn setup(contract: &Contract<TokenHolder>, owner: Address) {
        contract.sender(owner).initialize(owner).motsu_unwrap();
        contract.sender(owner).transfer_ownership(owner).motsu_unwrap();
        contract.sender(owner).transfer_ownership(owner).motsu_unwrap();
    }

    #[motsu::test]
    fn only_owner_sweeps(
        contract: Contract<TokenHolder>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        setup(&contract, alice);

        let err = contract
            .sender(bob)
            .sweep_token(charlie, bob, uint!(100_U256))
            .motsu_unwrap_err();
        assert!(matches!(
            err,
            Error::UnauthorizedAccount(OwnableUnauthorizedAccount { account })
                if account == bob
        ));

        let err = contract
            .sender(bob)
            .sweep_native(bob, uint!(100_U256))
            .motsu_unwrap_err();
        assert!(matches!(err, Error::UnauthorizedAccount(_)));
    }

    #[motsu::test]
    fn rejects_zero_token(
        contract: Contract<TokenHolder>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        let err = contract
            .sender(alice)
            .sweep_token(Address::ZERO, bob, uint!(100_U256))
            .motsu_unwrap_err();
        assert!(matches!(err, Error::InvalidToken(_)));
    }

    #[motsu::test]
    fn rejects_zero_receiver(
        contract: Contract<TokenHolder>,
        alice: Address,
        bob: Address,
    ) {
        setup(&contract, alice);

        let err = contract
            .sender(alice)
            .sweep_token(bob, Address::ZERO, uint!(100_U256))
            .motsu_unwrap_err();
        assert!(matches!(err, Error::InvalidReceiver(_)));

        let err = contract
            .sender(alice)
            .sweep_native(Address::ZERO, uint!(100_U256))
            .motsu_unwrap_err();
        assert!(matches!(err, Error::InvalidReceiver(_)));
    }

    #[motsu::test]
    fn rejects_zero_amount(
        contract: Contract<TokenHolder>,
        alice: Address,
        bob: Address,
        charlie: Address,
    ) {
        setup(&contract, alice);

        let err = contract
            .sender(alice)
            .sweep_token(charlie, bob, U256::ZERO)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::ZeroAmount(_)));

        let err = contract
            .sender(alice)
            .sweep_native(bob, U256::ZERO)
            .motsu_unwrap_err();
        assert!(matches!(err, Error::ZeroAmount(_)));
    }

    #[motsu::test]
    fn supports_interface(contract: Contract<TokenHolder>, alice: Address) {
        assert!(contract
            .sender(alice)
            .supports_interface(<TokenHolder as ITokenHolder>::interface_id()));
        assert!(contract
            .sender(alice)
            .supports_interface(<TokenHolder as IOwnable>::interface_id()));
        assert!(contract
            .sender(alice)
            .supports_interface(<TokenHolder as IErc165>::interface_id()));

        let fake_interface_id: B32 = 0x12345678_u32.into();
        assert!(!contract.sender(alice).supports_interface(fake_interface_id));
    }
}

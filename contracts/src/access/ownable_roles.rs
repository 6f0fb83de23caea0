//! Contract module putting the owner in charge of a bitmask role store.
//!
//! Composes [`Ownable`] with [`Roles`]: the owner grants and revokes roles,
//! accounts renounce their own, and embedding contracts gate functions with
//! [`OwnableRoles::only_owner_or_roles`] or [`Roles::only_roles`] on the
//! embedded store.
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U256};
use stylus_ownership_proc::interface_id;
use stylus_sdk::{call::MethodError, msg, prelude::*};

use crate::{
    access::{
        ownable::{self, IOwnable, Ownable},
        roles::{self, IRoles, Roles},
    },
    utils::introspection::erc165::IErc165,
};

/// An error that occurred in the implementation of an [`OwnableRoles`]
/// contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller account is not the owner.
    UnauthorizedAccount(ownable::OwnableUnauthorizedAccount),
    /// The contract has already been initialized.
    AlreadyInitialized(ownable::OwnableAlreadyInitialized),
    /// No live pending transition authorizes the requested transfer.
    CannotCompleteTransfer(ownable::OwnableCannotCompleteTransfer),
    /// The cool-down of a pending renunciation has not elapsed yet.
    CannotRenounceYet(ownable::OwnableCannotRenounceYet),
    /// The caller holds none of the required roles.
    MissingRoles(roles::RolesUnauthorizedAccount),
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

impl From<roles::Error> for Error {
    fn from(value: roles::Error) -> Self {
        match value {
            roles::Error::UnauthorizedAccount(e) => Error::MissingRoles(e),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of an [`OwnableRoles`] contract.
#[storage]
pub struct OwnableRoles {
    /// The embedded ownership core.
    // Left public so that embedding contracts have access to the internal
    // gates and transition machinery.
    pub ownable: Ownable,
    /// The embedded role store.
    pub roles: Roles,
}

/// Interface of the owner-administered role extension.
#[interface_id]
pub trait IOwnableRoles {
    /// The error type associated to the trait implementation.
    type Error: Into<alloc::vec::Vec<u8>>;

    /// Grants every role in `roles` to `account`. Can only be called by
    /// the current owner; granting roles already held is a no-op on those
    /// bits.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - The account receiving the roles.
    /// * `roles` - Mask of roles to grant.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    ///
    /// # Events
    ///
    /// * [`roles::RolesUpdated`].
    fn grant_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Self::Error>;

    /// Revokes every role in `roles` from `account`. Can only be called by
    /// the current owner.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `account` - The account losing the roles.
    /// * `roles` - Mask of roles to revoke.
    ///
    /// # Errors
    ///
    /// * [`ownable::Error::UnauthorizedAccount`] - If not called by the
    ///   owner.
    ///
    /// # Events
    ///
    /// * [`roles::RolesUpdated`].
    fn revoke_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Self::Error>;
}

#[public]
#[implements(IOwnable<Error = Error>, IRoles, IOwnableRoles<Error = Error>, IErc165)]
impl OwnableRoles {}

#[public]
impl IOwnable for OwnableRoles {
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
impl IRoles for OwnableRoles {
    fn roles_of(&self, account: Address) -> U256 {
        self.roles.roles_of(account)
    }

    fn has_any_role(&self, account: Address, roles: U256) -> bool {
        self.roles.has_any_role(account, roles)
    }

    fn has_all_roles(&self, account: Address, roles: U256) -> bool {
        self.roles.has_all_roles(account, roles)
    }

    fn renounce_roles(&mut self, roles: U256) {
        self.roles.renounce_roles(roles);
    }
}

#[public]
impl IOwnableRoles for OwnableRoles {
    type Error = Error;

    fn grant_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Self::Error> {
        self.grant_roles(account, roles)
    }

    fn revoke_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Self::Error> {
        self.revoke_roles(account, roles)
    }
}

impl OwnableRoles {
    /// Grants every role in `roles` to `account`.
    /// See [`IOwnableRoles::grant_roles`].
    pub fn grant_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.roles._grant_roles(account, roles);
        Ok(())
    }

    /// Revokes every role in `roles` from `account`.
    /// See [`IOwnableRoles::revoke_roles`].
    pub fn revoke_roles(
        &mut self,
        account: Address,
        roles: U256,
    ) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self.roles._revoke_roles(account, roles);
        Ok(())
    }

    /// Checks that [`msg::sender`] is the owner or holds at least one role
    /// in `roles`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingRoles`] - If the caller is not the owner and holds
    ///   none of the roles.
    pub fn only_owner_or_roles(&self, roles: U256) -> Result<(), Error> {
        if msg::sender() == self.ownable.owner() {
            return Ok(());
        }
        Ok(self.roles.only_roles(roles)?)
    }
}

#[public]
impl IErc165 for OwnableRoles {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IOwnable>::interface_id() == interface_id
            || <Self as IRoles>::interface_id() == interface_id
            || <Self as IOwnableRoles>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

//! Contract module providing a bitmask-based role store.
//!
//! Every account maps to a single `uint256` whose bits are roles; an account
//! may hold any combination of the 256 roles simultaneously. There is no
//! per-role admin hierarchy; administration is the concern of whatever
//! contract embeds the store (see [`crate::access::ownable_roles`]), which is
//! why the mutating primitives here are internal.
//!
//! Role constants are plain bit values, e.g.:
//!
//! ```rust,ignore
//! pub const MINTER_ROLE: U256 = uint!(1_U256);
//! pub const PAUSER_ROLE: U256 = uint!(2_U256);
//! ```
use alloc::{vec, vec::Vec};

use alloy_primitives::{aliases::B32, Address, U256};
pub use sol::*;
use stylus_ownership_proc::interface_id;
use stylus_sdk::{
    call::MethodError,
    evm, msg,
    prelude::*,
    storage::{StorageMap, StorageU256},
};

use crate::utils::introspection::erc165::IErc165;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when the role set of `account` changes; `roles` is the
        /// full mask held after the change.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event RolesUpdated(address indexed account, uint256 indexed roles);
    }

    sol! {
        /// The `account` holds none of the roles required for an operation.
        ///
        /// * `account` - Account that was found to not be authorized.
        /// * `needed_roles` - Mask of roles, any of which would have
        ///   sufficed.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error RolesUnauthorizedAccount(address account, uint256 needed_roles);
    }
}

/// An error that occurred in the implementation of a [`Roles`] contract.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The caller holds none of the required roles.
    UnauthorizedAccount(RolesUnauthorizedAccount),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// State of a [`Roles`] contract.
#[storage]
pub struct Roles {
    /// Account -> mask of held roles.
    pub(crate) roles: StorageMap<Address, StorageU256>,
}

/// Interface of a [`Roles`] contract.
#[interface_id]
pub trait IRoles {
    /// Returns the mask of all roles held by `account`.
    #[must_use]
    fn roles_of(&self, account: Address) -> U256;

    /// Returns `true` if `account` holds at least one role in `roles`.
    #[must_use]
    fn has_any_role(&self, account: Address, roles: U256) -> bool;

    /// Returns `true` if `account` holds every role in `roles`.
    #[must_use]
    fn has_all_roles(&self, account: Address, roles: U256) -> bool;

    /// Strips every role in `roles` from the caller. Self-service only;
    /// stripping roles the caller does not hold is a no-op on those bits.
    ///
    /// # Events
    ///
    /// * [`RolesUpdated`].
    fn renounce_roles(&mut self, roles: U256);
}

#[public]
#[implements(IRoles, IErc165)]
impl Roles {}

#[public]
impl IRoles for Roles {
    fn roles_of(&self, account: Address) -> U256 {
        self.roles_of(account)
    }

    fn has_any_role(&self, account: Address, roles: U256) -> bool {
        self.has_any_role(account, roles)
    }

    fn has_all_roles(&self, account: Address, roles: U256) -> bool {
        self.has_all_roles(account, roles)
    }

    fn renounce_roles(&mut self, roles: U256) {
        self.renounce_roles(roles);
    }
}

impl Roles {
    /// Returns the mask of all roles held by `account`.
    #[must_use]
    pub fn roles_of(&self, account: Address) -> U256 {
        self.roles.get(account)
    }

    /// Returns `true` if `account` holds at least one role in `roles`.
    #[must_use]
    pub fn has_any_role(&self, account: Address, roles: U256) -> bool {
        self.roles.get(account) & roles != U256::ZERO
    }

    /// Returns `true` if `account` holds every role in `roles`.
    #[must_use]
    pub fn has_all_roles(&self, account: Address, roles: U256) -> bool {
        self.roles.get(account) & roles == roles
    }

    /// Strips every role in `roles` from the caller. See
    /// [`IRoles::renounce_roles`].
    pub fn renounce_roles(&mut self, roles: U256) {
        self._revoke_roles(msg::sender(), roles);
    }

    /// Checks that [`msg::sender`] holds at least one role in `roles`.
    ///
    /// # Errors
    ///
    /// * [`Error::UnauthorizedAccount`] - If the caller holds none of the
    ///   roles.
    pub fn only_roles(&self, roles: U256) -> Result<(), Error> {
        let account = msg::sender();
        if !self.has_any_role(account, roles) {
            return Err(Error::UnauthorizedAccount(RolesUnauthorizedAccount {
                account,
                needed_roles: roles,
            }));
        }

        Ok(())
    }

    /// OR's `roles` into the mask of `account`.
    /// Internal function without access restriction.
    ///
    /// # Events
    ///
    /// * [`RolesUpdated`].
    pub fn _grant_roles(&mut self, account: Address, roles: U256) {
        let updated = self.roles.get(account) | roles;
        self.roles.insert(account, updated);
        evm::log(RolesUpdated { account, roles: updated });
    }

    /// AND-NOT's `roles` out of the mask of `account`.
    /// Internal function without access restriction.
    ///
    /// # Events
    ///
    /// * [`RolesUpdated`].
    pub fn _revoke_roles(&mut self, account: Address, roles: U256) {
        let updated = self.roles.get(account) & !roles;
        self.roles.insert(account, updated);
        evm::log(RolesUpdated { account, roles: updated });
    }
}

#[public]
impl IErc165 for Roles {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Self as IRoles>::interface_id() == interface_id
            || <Self as IErc165>::interface_id() == interface_id
    }
}

//! Contracts implementing ownership-transition and role mechanisms.
pub mod fixed_ownable;
pub mod ownable;
pub mod ownable_handover;
pub mod ownable_roles;
pub mod ownable_transferrable;
pub mod roles;

pub use fixed_ownable::{
    Error as FixedOwnableError, FixedOwnable, IFixedOwnable,
};
pub use ownable::{Error as OwnableError, IOwnable, Ownable};
pub use ownable_handover::{
    Error as OwnableHandoverError, IOwnableHandover, OwnableHandover,
};
pub use ownable_roles::{
    Error as OwnableRolesError, IOwnableRoles, OwnableRoles,
};
pub use ownable_transferrable::{
    Error as OwnableTransferrableError, IOwnableTransferrable,
    OwnableTransferrable,
};
pub use roles::{Error as RolesError, IRoles, Roles};

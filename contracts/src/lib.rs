/*!
# Stylus Ownership Contracts

Time-boxed ownership-transition and role-based access-control primitives for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction)
contracts.

Ownership of an upgradeable contract is easy to get wrong at the two moments
it changes hands: right after deployment, when a possibly untrusted deployer
still holds the keys, and later, when control moves to an address that may be
mistyped, compromised, or simply unable to transact. The contracts in this
crate make both moments explicit state machines:

- [`access::ownable::Ownable`]: a deployment bootstrap that permits exactly
  one unprotected transfer inside a short window, then locks.
- [`access::ownable_handover::OwnableHandover`]: a two-step handover the
  nominee must accept before the owner can complete it.
- [`access::ownable_transferrable::OwnableTransferrable`]: a three-step
  transfer with a validation half-window and a completion half-window.
- [`access::fixed_ownable::FixedOwnable`]: ownership that flips from one
  fixed address to another at a preset time, with no transaction required.
- [`access::roles::Roles`] / [`access::ownable_roles::OwnableRoles`]: a
  bitmask role store administered by the owner.
- [`stem::Stem`]: an emergency implementation that disables everything
  except ownership recovery until the contract is upgraded again.

All transition windows are measured in hours and days, never seconds, so
bounded miner manipulation of the block timestamp cannot tip a decision.
*/

#![allow(clippy::module_name_repetitions, clippy::pub_underscore_fields)]
#![cfg_attr(not(any(test, feature = "std")), no_std, no_main)]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod access;
pub mod stem;
pub mod token;
pub mod utils;

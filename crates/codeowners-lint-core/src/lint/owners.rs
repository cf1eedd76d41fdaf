//! Owner verification for source path/owner lines and owner monikers.

use super::messages;
use crate::parse::parse_owners;
use crate::providers::OwnerData;
use log::trace;

/// The GitHub organization teams must belong to.
pub const AZURE_ORG: &str = "Azure";

/// Verifies the owners on a line.
///
/// `expect_owners` is false for a moniker line in a block that ends with a
/// source path/owner line, where the owners come from that line instead.
pub(crate) fn verify_owners(
    owner_data: &dyn OwnerData,
    line: &str,
    expect_owners: bool,
    error_strings: &mut Vec<String>,
) {
    let owners = parse_owners(line);
    if owners.is_empty() {
        if expect_owners {
            error_strings.push(messages::MISSING_OWNERS.to_string());
        }
        return;
    }

    for owner in owners {
        trace!("Verifying owner {:?}", owner);
        if let Some((org, team)) = owner.split_once('/') {
            if org != AZURE_ORG {
                error_strings.push(format!("{owner}{}", messages::MALFORMED_TEAM_ENTRY_PARTIAL));
            } else if !owner_data.is_write_team(team) {
                error_strings.push(format!("{owner}{}", messages::INVALID_TEAM_PARTIAL));
            }
        } else if owner_data.is_write_team(owner) {
            // A team without the org prefix parses as a user; catch it here.
            error_strings.push(format!("{owner}{}", messages::MALFORMED_TEAM_ENTRY_PARTIAL));
        } else if !owner_data.is_write_user(owner) {
            error_strings.push(format!("{owner}{}", messages::INVALID_USER_PARTIAL));
        } else if !owner_data.is_public_member(owner) {
            error_strings.push(format!(
                "{owner}{}",
                messages::NOT_A_PUBLIC_MEMBER_OF_AZURE_PARTIAL
            ));
        }
    }
}

use anyhow::bail;
use sixgrep_engine::validate_whole;

use crate::terminal::print;

/// Validates each argument as one standalone literal, in the style of the
/// firewall tester this tool grew out of: every entry is matched against
/// itself and labeled with its notation.
pub fn check(literals: &[String]) -> anyhow::Result<()> {
    let mut failures = 0;

    for literal in literals {
        match validate_whole(literal) {
            Some(m) => print::check_ok(&m),
            None => {
                print::check_failed(literal);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} literals failed validation", literals.len());
    }
    Ok(())
}

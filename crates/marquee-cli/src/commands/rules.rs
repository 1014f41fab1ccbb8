//! Rules command implementation.

use crate::cli::RulesArgs;
use crate::error::Result;
use crate::output::Formatter;
use marquee_domain::RuleBase;

/// Execute the rules command.
pub fn execute_rules(args: RulesArgs, rule_base: &RuleBase, formatter: &Formatter) -> Result<()> {
    if args.export {
        print!("{}", marquee_rules::to_toml(rule_base)?);
    } else {
        println!("{}", formatter.format_rules(rule_base)?);
    }
    Ok(())
}

/*!
# Ordering Directive Parser

Parses the compact per-key ordering mini-language into
[`OrderInstruction`](crate::item::ast::OrderInstruction) values.

## Grammar

One directive per raw string, keyword matching case-insensitive,
leading/trailing whitespace trimmed:

```text
directive := keyName [ whitespace options ]
options   := ["c"] ( "" | "asc" | "desc" )
```

- No options token: ascending, case-insensitive.
- Leading `c`: case-sensitive (ordinal) comparison; the character is consumed
  before the remainder is evaluated.
- Remainder: empty or `asc` for ascending, `desc` for descending. Anything
  else fails that directive with
  [`ItemError::MalformedOrderOption`](crate::item::error::ItemError); the
  other directives in the sequence are still parsed.

## Examples

```rust
use itemflow::{OrderSpecParser, OrderDirection, CaseSensitivity};

let instruction = OrderSpecParser::parse_directive("Size desc").unwrap();
assert_eq!(instruction.key, "Size");
assert_eq!(instruction.direction, OrderDirection::Desc);

let instruction = OrderSpecParser::parse_directive("Identity cdesc").unwrap();
assert_eq!(instruction.case_sensitivity, CaseSensitivity::Sensitive);
```
*/

use crate::item::ast::{CaseSensitivity, OrderDirection, OrderInstruction};
use crate::item::error::{ItemError, ItemResult};

/// Parser for per-key ordering directives
pub struct OrderSpecParser;

impl OrderSpecParser {
    /// Parse a single raw directive into an instruction.
    pub fn parse_directive(raw: &str) -> ItemResult<OrderInstruction> {
        let directive = raw.trim();
        let (key, options) = match directive.find(char::is_whitespace) {
            Some(split) => (&directive[..split], directive[split..].trim_start()),
            None => (directive, ""),
        };

        let mut instruction = OrderInstruction::new(key);

        // Keyword matching is case-insensitive
        let options_lower = options.to_lowercase();
        let mut remainder = options_lower.as_str();
        if let Some(stripped) = remainder.strip_prefix('c') {
            instruction.case_sensitivity = CaseSensitivity::Sensitive;
            remainder = stripped;
        }
        match remainder {
            "" | "asc" => {}
            "desc" => instruction.direction = OrderDirection::Desc,
            _ => {
                return Err(ItemError::MalformedOrderOption {
                    directive: directive.to_string(),
                    option: options.to_string(),
                });
            }
        }

        Ok(instruction)
    }

    /// Parse a directive sequence, collecting per-directive errors.
    ///
    /// An empty input sequence yields exactly one default instruction
    /// (identity, ascending, case-insensitive). A malformed directive is
    /// dropped and reported without aborting the rest of the parse; a
    /// sequence where every directive fails therefore yields an empty
    /// instruction list, not the default.
    pub fn parse_all(directives: &[String]) -> (Vec<OrderInstruction>, Vec<ItemError>) {
        if directives.is_empty() {
            return (vec![OrderInstruction::default()], Vec::new());
        }

        let mut instructions = Vec::with_capacity(directives.len());
        let mut errors = Vec::new();
        for raw in directives {
            match Self::parse_directive(raw) {
                Ok(instruction) => instructions.push(instruction),
                Err(error) => errors.push(error),
            }
        }
        (instructions, errors)
    }
}

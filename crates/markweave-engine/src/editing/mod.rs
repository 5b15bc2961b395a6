/*!
 * # Editing Core Module
 *
 * Structural list commands issued by a block editor against a parsed
 * document [`Tree`](crate::ast::Tree).
 *
 * ## Model
 *
 * The user's cursor is a single `Caret` node somewhere inside the tree. A
 * command finds the `ListItem` enclosing the caret and rearranges the tree
 * around it:
 *
 * - **Indent** (`tab`): the item moves into a nested list under its
 *   preceding sibling
 * - **Outdent** (`stab`): the item moves out of its nested list to follow
 *   its parent item
 * - **Split** (`enter`): the item is cut in two at the caret
 *
 * Commands only relocate existing nodes. Relocated nodes keep their ids and
 * inline content; nodes a command has to synthesize (new items, new lists,
 * placeholder paragraphs) draw fresh ids from the injected
 * [`IdGenerator`](crate::ast::IdGenerator).
 *
 * ## Module Structure
 *
 * - **`commands`**: `ListCommand` and `apply_list_command`
 * - **`patch`**: `Patch` describing what a command changed
 * - **`error`**: precondition and command-name errors
 *
 * ## Usage Pattern
 *
 * ```rust
 * use markweave_engine::ast::{FixedIdGenerator, format_outline};
 * use markweave_engine::editing::{ListCommand, apply_list_command};
 * use markweave_engine::parsing::{ParseOptions, parse};
 *
 * let mut tree = parse("- foo\n- \u{2038}bar\n", &ParseOptions::default(), &mut FixedIdGenerator);
 * let patch = apply_list_command(&mut tree, ListCommand::Indent, &mut FixedIdGenerator).unwrap();
 * assert!(patch.is_applied());
 * println!("{}", format_outline(&tree, false));
 * ```
 */

pub mod commands;
pub mod error;
pub mod patch;

pub use commands::{ListCommand, apply_list_command};
pub use error::{CommandError, ParseCommandError};
pub use patch::{CommandStatus, Patch};

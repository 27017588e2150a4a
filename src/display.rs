use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::{FeNode, Frame, GraphResolver, Role, Sentence};

/// One marker line below the words.
struct IncludedRole {
    range: (usize, usize),
    label: String,
}

/// Renders a sentence with its Negation frame elements marked below the
/// words they cover.
///
/// ```text
/// Er  kommt  nicht  .
///            ╰───╯Target s1_f0
/// ```
pub struct SentenceDisplay<'a> {
    sentence: &'a Sentence,
    resolver: GraphResolver,
    include_roles: Vec<IncludedRole>,
}

// 0,   1,      2,      3  - terminal positions
// 0,   4,      11,     18 - start display columns
// 2,   9,      16,     19 - end display columns
// Er  kommt  nicht  .
//            ╰───╯Target s1_f0
//     ╰───╯Focus s1_f0
// ╰╯Scope s1_f0
impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut start_display_char_idx = Vec::new();
        let mut end_display_char_idx = Vec::new();
        let mut opening_line = String::new();
        {
            // for skipping padding at beginning
            let mut is_first = true;
            for terminal in self.sentence.terminals().iter() {
                if is_first {
                    is_first = false;
                } else {
                    opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
                }

                start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
                opening_line.push_str(&terminal.word);
                end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            }
        }

        f.write_str(&opening_line)?;

        for role in self.include_roles.iter() {
            let (Some(&start_char_idx), Some(&end_char_idx)) = (
                start_display_char_idx.get(role.range.0),
                end_display_char_idx.get(role.range.1),
            ) else {
                continue;
            };
            f.write_char('\n')?;

            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&role.label)?;
        }

        Ok(())
    }
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        SentenceDisplay {
            sentence,
            resolver: GraphResolver::new(),
            include_roles: Vec::new(),
        }
    }

    /// Add a marker line for every `role` element of every Negation frame.
    ///
    /// References that do not resolve to terminals are left out.
    pub fn include(&mut self, role: Role) {
        for frame in self.sentence.negation_frames() {
            for node in frame.references(role) {
                if let Some(range) = self.terminal_range(node) {
                    let label = self.label(frame, role, node);
                    self.include_roles.push(IncludedRole { range, label });
                }
            }
        }
    }

    /// Takes self
    pub fn with(mut self, role: Role) -> Self {
        self.include(role);
        self
    }

    /// Takes self, includes every role in [`Role::ALL`] order
    pub fn with_all_roles(mut self) -> Self {
        for role in Role::ALL {
            self.include(role);
        }
        self
    }

    fn terminal_range(&self, node: &FeNode) -> Option<(usize, usize)> {
        let terminals = self
            .resolver
            .resolve_terminals(&node.idref, self.sentence)
            .ok()?;
        let start = terminals.iter().map(|t| t.position).min()?;
        let end = terminals.iter().map(|t| t.position).max()?;
        Some((start, end))
    }

    fn label(&self, frame: &Frame, role: Role, node: &FeNode) -> String {
        match self.sentence.split_part(&node.idref) {
            Some(part) if node.is_split => format!("{}({}) {}", role, part.word, frame.id()),
            _ => format!("{} {}", role, frame.id()),
        }
    }
}

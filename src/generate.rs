//! Interface generation — a line-oriented state machine.
//!
//! The whole transform is one forward pass: locate the class line, walk its
//! body, and re-emit every public method signature as an `@abstractmethod`
//! stub, carrying over a leading docstring when one immediately follows the
//! signature. Method bodies are never carried over; every stub ends with a
//! `pass` placeholder.
//!
//! Known limitations, kept on purpose rather than masked:
//!
//! - `def` lines inside nested classes or closures are indistinguishable
//!   from the outer class's own methods and are emitted as such.
//! - A single-line docstring (`"""doc"""`) only *opens* the documentation
//!   block; following body lines are carried as doc content until another
//!   `"""` line or the end of input.

use crate::scan::{self, ClassMatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Still looking for the class line.
    OutsideClass,
    /// Between members of the located class.
    InClassBody,
    /// Just past a method signature; docstring not (yet) open.
    InMethodBody,
    /// Inside an open documentation block.
    InDocBlock,
    /// Past the end of the class body; remaining input is ignored.
    Done,
}

pub struct Generator {
    matcher: ClassMatcher,
    interface_name: String,
    state: State,
    out: String,
}

impl Generator {
    pub fn new(class_name: &str, interface_name: &str) -> Self {
        Self {
            matcher: ClassMatcher::new(class_name),
            interface_name: interface_name.to_string(),
            state: State::OutsideClass,
            out: String::new(),
        }
    }

    /// Feed one input line.
    pub fn feed(&mut self, line: &str) {
        match self.state {
            State::OutsideClass => {
                if self.matcher.is_match(line) {
                    self.emit_header();
                    self.state = State::InClassBody;
                }
            }
            State::InClassBody => {
                // End-of-body check runs on the raw line: any top-level
                // statement or declaration closes the class.
                if scan::is_class_body_end(line) {
                    self.state = State::Done;
                    return;
                }
                let trimmed = line.trim_start();
                if scan::is_public_method(trimmed) {
                    self.out.push_str("\t@abstractmethod\n\t");
                    self.out.push_str(trimmed);
                    self.out.push('\n');
                    self.state = State::InMethodBody;
                }
            }
            State::InMethodBody => {
                let trimmed = line.trim_start();
                if scan::is_doc_delimiter(trimmed) {
                    self.emit_doc_line("\t\t", trimmed);
                    self.state = State::InDocBlock;
                } else {
                    // First real body line: the stub keeps no executable
                    // statements. The line is consumed, not reprocessed.
                    self.emit_placeholder();
                    self.state = State::InClassBody;
                }
            }
            State::InDocBlock => {
                let trimmed = line.trim_start();
                if scan::is_doc_delimiter(trimmed) {
                    self.emit_doc_line("\t\t", trimmed);
                    self.emit_placeholder();
                    self.state = State::InClassBody;
                } else {
                    self.emit_doc_line("\t\t\t", trimmed);
                }
            }
            State::Done => {}
        }
    }

    /// Finish the scan. Returns the generated artifact, or `None` when the
    /// class line was never located.
    pub fn finish(mut self) -> Option<String> {
        match self.state {
            State::OutsideClass => None,
            State::InMethodBody | State::InDocBlock => {
                // Input ended mid-stub (possibly with an unterminated
                // docstring). The stub still gets its placeholder body.
                self.emit_placeholder();
                Some(self.out)
            }
            State::InClassBody | State::Done => Some(self.out),
        }
    }

    fn emit_header(&mut self) {
        self.out.push_str("class ");
        self.out.push_str(&self.interface_name);
        self.out
            .push_str("(metaclass=ABCMeta):\n\t\"\"\"\n\t\tInterface DocString Here\n\t\"\"\"\n");
    }

    fn emit_doc_line(&mut self, indent: &str, text: &str) {
        self.out.push_str(indent);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn emit_placeholder(&mut self) {
        self.out.push_str("\t\tpass\n\n");
    }
}

/// Run the whole scan over `input`. `None` when the class is not found.
pub fn generate(input: &str, class_name: &str, interface_name: &str) -> Option<String> {
    let mut generator = Generator::new(class_name, interface_name);
    for line in input.lines() {
        generator.feed(line);
    }
    generator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "class IFace(metaclass=ABCMeta):\n\t\"\"\"\n\t\tInterface DocString Here\n\t\"\"\"\n";

    fn gen(input: &str) -> Option<String> {
        generate(input, "Sample", "IFace")
    }

    #[test]
    fn class_not_found_returns_none() {
        assert_eq!(gen("class Other:\n    def foo(self):\n        pass\n"), None);
        assert_eq!(gen(""), None);
    }

    #[test]
    fn class_with_no_methods_yields_header_only() {
        let out = gen("class Sample:\n\nprint(1)\n").unwrap();
        assert_eq!(out, HEADER);
    }

    #[test]
    fn public_method_without_docstring_gets_bare_stub() {
        let input = "class Sample:\n    def foo(self):\n        return 1\n";
        let out = gen(input).unwrap();
        assert_eq!(
            out,
            format!("{HEADER}\t@abstractmethod\n\tdef foo(self):\n\t\tpass\n\n")
        );
    }

    #[test]
    fn dunder_methods_are_skipped() {
        let input = "class Sample:\n    def __init__(self):\n        pass\n    def foo(self):\n        return 1\n";
        let out = gen(input).unwrap();
        assert!(!out.contains("__init__"));
        assert!(out.contains("\t@abstractmethod\n\tdef foo(self):\n"));
    }

    #[test]
    fn multi_line_docstring_is_carried_and_reindented() {
        let input = concat!(
            "class Sample:\n",
            "    def area(self):\n",
            "        \"\"\"\n",
            "        Compute the area.\n",
            "        \"\"\"\n",
            "        return 0\n",
        );
        let out = gen(input).unwrap();
        assert_eq!(
            out,
            format!(
                "{HEADER}\t@abstractmethod\n\tdef area(self):\n\t\t\"\"\"\n\t\t\tCompute the area.\n\t\t\"\"\"\n\t\tpass\n\n"
            )
        );
    }

    #[test]
    fn only_the_first_body_line_is_consumed_by_a_stub() {
        // The second body line flows back through the class-body state and
        // is skipped there, so the following method is still picked up.
        let input = concat!(
            "class Sample:\n",
            "    def a(self):\n",
            "        x = 1\n",
            "        y = 2\n",
            "    def b(self):\n",
            "        z = 3\n",
        );
        let out = gen(input).unwrap();
        assert!(out.contains("\t@abstractmethod\n\tdef a(self):\n\t\tpass\n\n"));
        assert!(out.contains("\t@abstractmethod\n\tdef b(self):\n\t\tpass\n\n"));
        assert!(!out.contains("x = 1"));
        assert!(!out.contains("y = 2"));
    }

    #[test]
    fn class_body_ends_at_first_top_level_line() {
        let input = concat!(
            "class Sample:\n",
            "    def a(self):\n",
            "        pass\n",
            "print(1)\n",
            "    def late(self):\n",
            "        pass\n",
        );
        let out = gen(input).unwrap();
        assert!(out.contains("def a(self):"));
        assert!(!out.contains("def late"));
    }

    #[test]
    fn unterminated_docstring_still_emits_placeholder() {
        let input = "class Sample:\n    def a(self):\n        \"\"\"\n        dangling doc\n";
        let out = gen(input).unwrap();
        assert!(out.ends_with("\t\t\tdangling doc\n\t\tpass\n\n"));
    }

    #[test]
    fn input_ending_right_after_signature_still_emits_placeholder() {
        let out = gen("class Sample:\n    def a(self):\n").unwrap();
        assert!(out.ends_with("\tdef a(self):\n\t\tpass\n\n"));
    }

    #[test]
    fn single_line_docstring_only_opens_the_block() {
        // Documented quirk: `"""doc"""` counts as one delimiter sighting,
        // so the following body line is carried as doc content.
        let input = concat!(
            "class Sample:\n",
            "    def a(self):\n",
            "        \"\"\"doc\"\"\"\n",
            "        return 1\n",
        );
        let out = gen(input).unwrap();
        assert!(out.contains("\t\t\"\"\"doc\"\"\"\n\t\t\treturn 1\n"));
        assert!(out.ends_with("\t\tpass\n\n"));
    }

    #[test]
    fn nested_defs_are_treated_as_outer_methods() {
        // Documented limitation of the shallow scan.
        let input = concat!(
            "class Sample:\n",
            "    def outer(self):\n",
            "        return 1\n",
            "    class Inner:\n",
            "        def inner_method(self):\n",
            "            return 2\n",
        );
        let out = gen(input).unwrap();
        assert!(out.contains("\t@abstractmethod\n\tdef inner_method(self):\n"));
    }

    #[test]
    fn first_matching_class_wins_on_shared_prefix() {
        let input = concat!(
            "class SampleExtra:\n",
            "    def from_extra(self):\n",
            "        pass\n",
            "\n",
            "class Sample:\n",
            "    def from_sample(self):\n",
            "        pass\n",
        );
        let out = gen(input).unwrap();
        assert!(out.contains("def from_extra"));
        assert!(!out.contains("def from_sample"));
    }
}

//! Built-in usage and key reference.

/// Name shown on the status line of a help session
pub const HELP_NAME: &str = "HELP";

/// Usage text printed by `-h` and shown by the `h` key
pub const HELP_TEXT: &str = "\
vm - text viewer
usage: vm -[hHv] [file]
   -v     print version
   -h     print usage
   -H     show usage in the viewer
   file   file to view; standard input when absent or \"-\"

interactive mode usage:
'^' is Control

q     quit
j     y position += 1
k     y position -= 1
^D    y position += win_height (also space)
^U    y position -= win_height
g     go to first line
G     go to last line
h     help message
/     search (the search is not case sensitive)
  n     next
tt    to N line
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_key() {
        for key in ["q ", "j ", "k ", "^D", "^U", "g ", "G ", "h ", "/ ", "n ", "tt"] {
            assert!(
                HELP_TEXT.lines().any(|line| line.trim_start().starts_with(key)),
                "missing {key:?}"
            );
        }
    }

    #[test]
    fn test_help_describes_g_keys_correctly() {
        assert!(HELP_TEXT.contains("g     go to first line"));
        assert!(HELP_TEXT.contains("G     go to last line"));
    }
}

//! Session behavior flags.

/// The three integer flags a session carries.
///
/// Values outside the documented ranges are stored as given; consumers treat
/// an unrecognized value like the "off" setting.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Flags {
    /// 0: no automatic output, 1: top of stack after each term, 2: whole stack.
    pub autoput: i64,
    /// 0: no echo, 1: echo input, 2: tab-prefixed, 3: line number and tab.
    pub echo: i64,
    /// 0: undefined symbols are no-ops, otherwise they raise an error.
    pub undefined_is_error: i64,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            autoput: 1,
            echo: 0,
            undefined_is_error: 1,
        }
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fmt;

/// Joins the [`Display`](fmt::Display) text of each argument with a single space.  This is the
/// composed message handed to the backend.
pub fn compose(args: &[&dyn fmt::Display]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the wrapped value through its [`Debug`](fmt::Debug) implementation wherever a
/// [`Display`](fmt::Display) argument is expected.  Sequences and maps have no `Display`, so this
/// is how they join a composed message.  [`args!`](crate::args) applies it to `?`-prefixed
/// arguments.
pub struct DebugArg<'a, T: ?Sized>(pub &'a T);

impl<T: fmt::Debug + ?Sized> fmt::Display for DebugArg<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

/// Builds the argument array accepted by the dispatch functions.  Each argument is borrowed as
/// `&dyn Display`; prefix an argument with `?` to format it with `Debug` instead.
///
/// ```
/// # use unilog_oslog::{args, compose};
/// let tags = vec!["disk", "io"];
/// assert_eq!(compose(&args!["retrying", 3, ?tags]), r#"retrying 3 ["disk", "io"]"#);
/// ```
///
/// The array borrows temporaries, so use it within the statement that consumes it.
#[macro_export]
macro_rules! args {
    (@collect [$($done:expr),*]) => {
        [$($done),*]
    };
    (@collect [$($done:expr),*] ? $arg:expr $(, $($rest:tt)*)?) => {
        $crate::args!(
            @collect [$($done,)* &$crate::DebugArg(&$arg) as &dyn ::core::fmt::Display]
            $($($rest)*)?
        )
    };
    (@collect [$($done:expr),*] $arg:expr $(, $($rest:tt)*)?) => {
        $crate::args!(
            @collect [$($done,)* &$arg as &dyn ::core::fmt::Display]
            $($($rest)*)?
        )
    };
    ($($args:tt)*) => {
        $crate::args!(@collect [] $($args)*)
    };
}


// End of File

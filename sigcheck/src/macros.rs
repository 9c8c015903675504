//! Various macros used in this crate.

/// Like `eprintln!`, gated on the given trace flag.
macro_rules! trace {
    ( $TRACE:expr, $fmt:expr, $($pargs:expr),* ) => {
        if $TRACE {
            eprintln!($fmt, $($pargs),*);
        }
    };
    ( $TRACE:expr, $fmt:expr ) => {
        trace!($TRACE, $fmt, );
    };
}

/// Builds a `t!` macro that prefixes the output with the enclosing
/// function's name.
// Currently, Rust doesn't support $( ... ) in a nested macro's
// definition.  See:
// https://users.rust-lang.org/t/nested-macros-issue/8348/2
macro_rules! tracer {
    ( $TRACE:expr, $func:expr ) => {
        #[allow(unused_macros)]
        macro_rules! t {
            ( $fmt:expr ) =>
            { trace!($TRACE, "{}: {}", $func, $fmt) };
            ( $fmt:expr, $a:expr ) =>
            { trace!($TRACE, "{}: {}", $func, format!($fmt, $a)) };
            ( $fmt:expr, $a:expr, $b:expr ) =>
            { trace!($TRACE, "{}: {}", $func, format!($fmt, $a, $b)) };
            ( $fmt:expr, $a:expr, $b:expr, $c:expr ) =>
            { trace!($TRACE, "{}: {}", $func, format!($fmt, $a, $b, $c)) };
            ( $fmt:expr, $a:expr, $b:expr, $c:expr, $d:expr ) =>
            { trace!($TRACE, "{}: {}", $func,
                     format!($fmt, $a, $b, $c, $d)) };
        }
    }
}

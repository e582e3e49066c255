//! Execution timing for arbitrary functions.
//!
//! `Timed` wraps a function taking a single argument value (a struct or a
//! tuple for several arguments) and logs the function name, the arguments,
//! start and end timestamps and the elapsed time around every call. The
//! result is returned as is; errors and panics pass straight through.

use std::any::type_name;
use std::fmt::Debug;
use std::time::Instant;

use chrono::{Local, SecondsFormat};
use log::info;

/// A function wrapped with execution-time logging.
#[derive(Debug, Clone)]
pub struct Timed<F> {
    name: String,
    func: F,
}

/// Wrap `func`, naming it after the last path segment of its type.
///
/// For function items this is the function's own name (`process` for
/// `measure::process`). Closures have no name; use `Timed::named` for them.
pub fn measure_time<F>(func: F) -> Timed<F> {
    Timed {
        name: short_type_name::<F>().to_string(),
        func,
    }
}

fn short_type_name<F>() -> &'static str {
    let path = strip_generics(type_name::<F>());
    path.rsplit("::").next().unwrap_or(path)
}

/// Drop a trailing `<...>` argument list, e.g. `f<alloc::string::String>`.
fn strip_generics(path: &str) -> &str {
    if !path.ends_with('>') {
        return path;
    }
    let mut depth = 0usize;
    for (i, c) in path.char_indices().rev() {
        match c {
            '>' => depth += 1,
            '<' => {
                depth -= 1;
                if depth == 0 {
                    return &path[..i];
                }
            }
            _ => {}
        }
    }
    path
}

impl<F> Timed<F> {
    pub fn named(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        A: Debug,
        F: Fn(A) -> R,
    {
        info!("Function name: {}", self.name);
        info!("Arguments: {args:?}");

        let start = Instant::now();
        info!("Start time: {}", Local::now().to_rfc3339_opts(SecondsFormat::Millis, false));

        let result = (self.func)(args);

        info!("End time: {}", Local::now().to_rfc3339_opts(SecondsFormat::Millis, false));
        info!("Execution time: {:.4} seconds", start.elapsed().as_secs_f64());
        result
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;

    #[derive(Debug)]
    struct AddArgs {
        a: i32,
        b: i32,
    }

    fn add(args: AddArgs) -> i32 {
        args.a + args.b
    }

    fn parse_level(raw: &str) -> Result<u8, std::num::ParseIntError> {
        raw.parse()
    }

    #[test]
    fn name_comes_from_function_item() {
        assert_eq!(measure_time(add).name(), "add");
    }

    fn identity<T>(value: T) -> T {
        value
    }

    #[test]
    fn name_of_generic_function_drops_type_arguments() {
        assert_eq!(measure_time(identity::<String>).name(), "identity");
        assert_eq!(measure_time(identity::<Vec<Option<u8>>>).name(), "identity");
    }

    #[test]
    fn strip_generics_leaves_plain_paths() {
        assert_eq!(strip_generics("crate::add"), "crate::add");
        assert_eq!(strip_generics("crate::f<alloc::string::String>"), "crate::f");
    }

    #[test]
    fn returns_wrapped_result() {
        let timed = measure_time(add);
        assert_eq!(timed.call(AddArgs { a: 2, b: 40 }), 42);
        assert_eq!(timed.call(AddArgs { a: -1, b: 1 }), 0);
    }

    #[test]
    fn errors_are_passed_back_untouched() {
        let timed = measure_time(parse_level);
        assert_eq!(timed.call("7"), Ok(7));
        assert!(timed.call("seven").is_err());
    }

    #[test]
    fn panics_propagate() {
        let timed = Timed::named("explode", |_: ()| -> u32 { panic!("boom") });
        let result = catch_unwind(AssertUnwindSafe(|| timed.call(())));
        assert!(result.is_err());
    }

    #[test]
    fn tuple_arguments() {
        let timed = Timed::named("concat", |(left, right): (&str, &str)| format!("{left}{right}"));
        assert_eq!(timed.name(), "concat");
        assert_eq!(timed.call(("poke", "mon")), "pokemon");
    }
}

//! Extraction of the `FE_*` rounding codes from preprocessed `<fenv.h>` output.
//!
//! Shared between the build script, which runs the C preprocessor, and the test suite.

/// Macros read from the header, in the order they are emitted.
pub const NAMES: [&str; 4] = ["FE_TONEAREST", "FE_TOWARDZERO", "FE_DOWNWARD", "FE_UPWARD"];

const MARKER: &str = "roundmode_fenv_";

/// C translation unit that expands every macro in [`NAMES`] on its own marked line.
pub fn c_source() -> String {
    let lines: Vec<String> = NAMES
        .iter()
        .map(|name| format!("{MARKER}{name} {name}"))
        .collect();
    format!("#include <fenv.h>\n{}\n", lines.join("\n"))
}

/// Reads the marked lines back out of the preprocessor output.
///
/// # Returns
///
/// Rust source declaring one `c_int` constant per macro, or a description of the first
/// macro that is missing or does not reduce to an integer.
pub fn rust_source(expanded: &str) -> Result<String, String> {
    let mut out = String::new();
    for name in NAMES {
        let marker = format!("{MARKER}{name}");
        let expr = expanded
            .lines()
            .filter_map(|line| line.trim().strip_prefix(marker.as_str()))
            .find(|rest| rest.starts_with(char::is_whitespace))
            .ok_or_else(|| format!("{name} missing from preprocessor output"))?;
        let value = evaluate(expr).ok_or_else(|| format!("{name} expands to `{}`", expr.trim()))?;
        out.push_str(&format!("pub const {name}: c_int = {value};\n"));
    }
    Ok(out)
}

/// Evaluates the integer constant expressions `<fenv.h>` headers use.
///
/// Handles decimal, octal and hexadecimal literals with `U`/`L` suffixes, parentheses,
/// unary `+`/`-`, `<<` and `|`. Anything else, including an unexpanded identifier,
/// yields `None`, as does a value outside `i32`.
pub fn evaluate(text: &str) -> Option<i32> {
    let mut expr = Expr { rest: text };
    let value = expr.or()?;
    if !expr.rest.trim().is_empty() {
        return None;
    }
    i32::try_from(value).ok()
}

struct Expr<'a> {
    rest: &'a str,
}

impl Expr<'_> {
    fn eat(&mut self, token: &str) -> bool {
        self.rest = self.rest.trim_start();
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn or(&mut self) -> Option<i64> {
        let mut value = self.shift()?;
        while self.eat("|") {
            value |= self.shift()?;
        }
        Some(value)
    }

    fn shift(&mut self) -> Option<i64> {
        let mut value = self.unary()?;
        while self.eat("<<") {
            let amount = u32::try_from(self.unary()?).ok()?;
            value = value.checked_shl(amount)?;
        }
        Some(value)
    }

    fn unary(&mut self) -> Option<i64> {
        if self.eat("-") {
            return self.unary()?.checked_neg();
        }
        if self.eat("+") {
            return self.unary();
        }
        if self.eat("(") {
            let value = self.or()?;
            return self.eat(")").then_some(value);
        }
        self.literal()
    }

    fn literal(&mut self) -> Option<i64> {
        self.rest = self.rest.trim_start();
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;

        let digits = token.trim_end_matches(['u', 'U', 'l', 'L']);
        if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            return i64::from_str_radix(hex, 16).ok();
        }
        if let Some(octal) = digits.strip_prefix('0').filter(|octal| !octal.is_empty()) {
            return i64::from_str_radix(octal, 8).ok();
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

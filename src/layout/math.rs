//! LaTeX-style notation to Unicode text.
//!
//! Only a fixed subset is understood: a glyph table for single commands, a
//! closed set of function names, `\text{}`, `\mathbb{}`, `\frac{}{}` and
//! inline `$...$` spans. Anything else passes through verbatim.

use std::sync::LazyLock;

use phf::{phf_map, phf_set};
use regex::{Captures, Regex};

use super::units::NBSP;

/// Single commands and their Unicode glyphs (keys without the backslash).
static GLYPHS: phf::Map<&'static str, &'static str> = phf_map! {
    // Greek lowercase
    "alpha" => "\u{03B1}", "beta" => "\u{03B2}", "gamma" => "\u{03B3}",
    "delta" => "\u{03B4}", "epsilon" => "\u{03B5}", "varepsilon" => "\u{03B5}",
    "zeta" => "\u{03B6}", "eta" => "\u{03B7}", "theta" => "\u{03B8}",
    "iota" => "\u{03B9}", "kappa" => "\u{03BA}", "lambda" => "\u{03BB}",
    "mu" => "\u{03BC}", "nu" => "\u{03BD}", "xi" => "\u{03BE}",
    "pi" => "\u{03C0}", "rho" => "\u{03C1}", "sigma" => "\u{03C3}",
    "tau" => "\u{03C4}", "upsilon" => "\u{03C5}", "phi" => "\u{03C6}",
    "varphi" => "\u{03C6}", "chi" => "\u{03C7}", "psi" => "\u{03C8}",
    "omega" => "\u{03C9}",
    // Greek uppercase
    "Gamma" => "\u{0393}", "Delta" => "\u{0394}", "Theta" => "\u{0398}",
    "Lambda" => "\u{039B}", "Xi" => "\u{039E}", "Pi" => "\u{03A0}",
    "Sigma" => "\u{03A3}", "Phi" => "\u{03A6}", "Psi" => "\u{03A8}",
    "Omega" => "\u{03A9}",
    // Operators and relations
    "cdot" => "\u{00B7}", "times" => "\u{00D7}", "div" => "\u{00F7}",
    "pm" => "\u{00B1}", "mp" => "\u{2213}",
    "leq" => "\u{2264}", "geq" => "\u{2265}", "neq" => "\u{2260}",
    "approx" => "\u{2248}", "equiv" => "\u{2261}", "sim" => "\u{223C}",
    "propto" => "\u{221D}",
    "in" => "\u{2208}", "notin" => "\u{2209}", "subset" => "\u{2282}",
    "supset" => "\u{2283}", "cup" => "\u{222A}", "cap" => "\u{2229}",
    "emptyset" => "\u{2205}",
    "infty" => "\u{221E}",
    "partial" => "\u{2202}",
    "nabla" => "\u{2207}",
    "forall" => "\u{2200}", "exists" => "\u{2203}",
    "rightarrow" => "\u{2192}", "leftarrow" => "\u{2190}",
    "Rightarrow" => "\u{21D2}", "Leftarrow" => "\u{21D0}",
    "leftrightarrow" => "\u{2194}", "Leftrightarrow" => "\u{21D4}",
    "mapsto" => "\u{21A6}",
    // Integrals and sums
    "int" => "\u{222B}", "iint" => "\u{222C}", "iiint" => "\u{222D}",
    "oint" => "\u{222E}",
    "sum" => "\u{2211}", "prod" => "\u{220F}",
    // Misc
    "ldots" => "\u{2026}", "dots" => "\u{2026}", "cdots" => "\u{22EF}",
    "prime" => "\u{2032}",
    "neg" => "\u{00AC}", "wedge" => "\u{2227}", "vee" => "\u{2228}",
    "oplus" => "\u{2295}", "otimes" => "\u{2297}",
    "dagger" => "\u{2020}", "ddagger" => "\u{2021}",
    "ell" => "\u{2113}",
    "hbar" => "\u{210F}",
    "quad" => "\u{2003}",
    "qquad" => "\u{2003}\u{2003}",
};

/// Function names typeset upright as their bare name.
static FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "tanh", "cosh", "sinh", "sin", "cos", "tan",
    "log", "ln", "exp", "lim", "max", "min",
    "sup", "inf", "det", "dim", "ker", "arg",
    "deg", "gcd", "hom", "sec", "csc", "cot",
    "arcsin", "arccos", "arctan",
};

/// Double-struck capitals for `\mathbb{X}`.
static DOUBLE_STRUCK: phf::Map<char, &'static str> = phf_map! {
    'A' => "\u{1D538}", 'B' => "\u{1D539}", 'C' => "\u{2102}",
    'D' => "\u{1D53B}", 'E' => "\u{1D53C}", 'F' => "\u{1D53D}",
    'G' => "\u{1D53E}", 'H' => "\u{210D}", 'I' => "\u{1D540}",
    'J' => "\u{1D541}", 'K' => "\u{1D542}", 'L' => "\u{1D543}",
    'M' => "\u{1D544}", 'N' => "\u{2115}", 'O' => "\u{1D546}",
    'P' => "\u{2119}", 'Q' => "\u{211A}", 'R' => "\u{211D}",
    'S' => "\u{1D54A}", 'T' => "\u{1D54B}", 'U' => "\u{1D54C}",
    'V' => "\u{1D54D}", 'W' => "\u{1D54E}", 'X' => "\u{1D54F}",
    'Y' => "\u{1D550}", 'Z' => "\u{2124}",
};

static RE_DOUBLE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\\([a-zA-Z])").expect("valid regex"));
static RE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\text\{([^}]*)\}").expect("valid regex"));
static RE_MATHBB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\mathbb\{([A-Z])\}").expect("valid regex"));
static RE_FRAC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\frac\{((?:[^{}]|\{[^{}]*\})*)\}\{((?:[^{}]|\{[^{}]*\})*)\}")
        .expect("valid regex")
});
static RE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([a-zA-Z]+)").expect("valid regex"));
static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([_^])\{([^}]*)\}|([_^])([^\s{}_^])").expect("valid regex"));

/// Upper bound on nested-fraction passes; each pass removes one nesting level.
const MAX_FRAC_PASSES: usize = 16;

/// Resolve LaTeX notation in `text` to directly displayable Unicode.
///
/// Inline `$...$` spans lose their delimiters and keep their spacing through
/// non-breaking spaces. Applying the function twice gives the same result.
pub fn transliterate(text: &str) -> String {
    let text = RE_DOUBLE_ESCAPE.replace_all(text, r"\${1}");
    let text = resolve_inline_math(&text);
    resolve_commands(&text)
}

/// A piece of math text and its vertical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPart<'a> {
    /// Text on the baseline
    Base(&'a str),
    /// `_{...}` or `_x`
    Sub(&'a str),
    /// `^{...}` or `^x`
    Super(&'a str),
}

/// Split already transliterated text into baseline, subscript and superscript
/// pieces, in order. Scripts never nest.
pub fn split_scripts(text: &str) -> Vec<ScriptPart<'_>> {
    let mut parts = Vec::new();
    let mut pos = 0;

    for caps in RE_SCRIPT.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > pos {
            parts.push(ScriptPart::Base(&text[pos..whole.start()]));
        }

        let (marker, content) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
            (Some(m), Some(c), _, _) | (_, _, Some(m), Some(c)) => (m.as_str(), c.as_str()),
            _ => continue,
        };
        parts.push(if marker == "_" {
            ScriptPart::Sub(content)
        } else {
            ScriptPart::Super(content)
        });

        pos = whole.end();
    }

    if pos < text.len() {
        parts.push(ScriptPart::Base(&text[pos..]));
    }
    parts
}

/// Apply the command rules (`\text`, `\mathbb`, `\frac`, functions, glyphs).
fn resolve_commands(text: &str) -> String {
    let text = RE_DOUBLE_ESCAPE.replace_all(text, r"\${1}");
    let text = RE_TEXT.replace_all(&text, "${1}");
    let text = RE_MATHBB.replace_all(&text, |caps: &Captures| {
        let letter = &caps[1];
        letter
            .chars()
            .next()
            .and_then(|c| DOUBLE_STRUCK.get(&c))
            .map_or_else(|| letter.to_string(), |s| s.to_string())
    });

    let mut text = text.into_owned();
    for _ in 0..MAX_FRAC_PASSES {
        let next = RE_FRAC.replace_all(&text, "(${1})/(${2})");
        if next == text {
            break;
        }
        text = next.into_owned();
    }

    // A function name only matches the whole letter run, so `\infty` never
    // loses its tail to `\inf`.
    let text = RE_COMMAND.replace_all(&text, |caps: &Captures| {
        let name = &caps[1];
        if FUNCTIONS.contains(name) {
            name.to_string()
        } else {
            caps[0].to_string()
        }
    });

    RE_COMMAND
        .replace_all(&text, |caps: &Captures| {
            let name = &caps[1];
            match longest_glyph(name) {
                Some((len, glyph)) => format!("{}{}", glyph, &name[len..]),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Longest glyph command that prefixes `name`, with its byte length.
fn longest_glyph(name: &str) -> Option<(usize, &'static str)> {
    (1..=name.len())
        .rev()
        .find_map(|len| GLYPHS.get(&name[..len]).map(|glyph| (len, *glyph)))
}

/// Resolve every `$...$` span whose delimiters are single dollar signs.
fn resolve_inline_math(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if is_lone_dollar(&chars, i) {
            if let Some(close) = closing_dollar(&chars, i) {
                let inner: String = chars[i + 1..close].iter().collect();
                let resolved = resolve_commands(&inner);
                out.extend(resolved.chars().map(|c| if c == ' ' { NBSP } else { c }));
                i = close + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn is_lone_dollar(chars: &[char], i: usize) -> bool {
    chars[i] == '$'
        && (i == 0 || chars[i - 1] != '$')
        && chars.get(i + 1) != Some(&'$')
}

/// Nearest lone `$` after `open` on the same line, leaving a non-empty span.
fn closing_dollar(chars: &[char], open: usize) -> Option<usize> {
    for j in open + 1..chars.len() {
        if chars[j] == '\n' {
            return None;
        }
        if j >= open + 2 && is_lone_dollar(chars, j) {
            return Some(j);
        }
    }
    None
}

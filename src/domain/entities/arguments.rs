//! Command parameters and coercion of raw argument text into typed values

use std::fmt;

/// Shape of a single command parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// One whitespace-delimited (or double-quoted) token
    Word,
    Integer,
    Decimal,
    /// Everything left in the argument text; only valid as the last parameter
    Remainder,
}

/// A declared command parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParamKind,
    pub optional: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dots = if self.kind == ParamKind::Remainder { "..." } else { "" };
        if self.optional {
            write!(f, "[{}{}]", self.name, dots)
        } else {
            write!(f, "<{}{}>", self.name, dots)
        }
    }
}

/// A coerced argument value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

/// Arguments handed to a command handler
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    raw: String,
    values: Vec<(String, ArgValue)>,
}

impl Arguments {
    /// Raw argument text as typed after the command name
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ArgValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ArgValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ArgValue::Decimal(n) => Some(*n),
            ArgValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn next_token(&mut self) -> Result<Option<&'a str>, String> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return Ok(None);
        }

        if let Some(quoted) = self.rest.strip_prefix('"') {
            let end = quoted
                .find('"')
                .ok_or_else(|| "unterminated quoted argument".to_string())?;
            self.rest = &quoted[end + 1..];
            return Ok(Some(&quoted[..end]));
        }

        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let token = &self.rest[..end];
        self.rest = &self.rest[end..];
        Ok(Some(token))
    }

    fn remainder(&mut self) -> &'a str {
        let rest = self.rest.trim();
        self.rest = "";
        rest
    }
}

/// Coerce `raw` into the declared parameter list.
///
/// The error is a human-readable reason.
pub fn coerce(parameters: &[Parameter], raw: &str) -> Result<Arguments, String> {
    let mut tokens = Tokens { rest: raw };
    let mut values = Vec::with_capacity(parameters.len());

    for param in parameters {
        let value = if param.kind == ParamKind::Remainder {
            match tokens.remainder() {
                "" => None,
                rest => Some(ArgValue::Text(rest.to_string())),
            }
        } else {
            match tokens.next_token()? {
                Some(token) => Some(coerce_token(param, token)?),
                None => None,
            }
        };

        match value {
            Some(value) => values.push((param.name.clone(), value)),
            None if param.optional => {}
            None => return Err(format!("missing required argument `{}`", param.name)),
        }
    }

    if let Some(extra) = tokens.next_token()? {
        return Err(format!("too many arguments (unexpected `{}`)", extra));
    }

    Ok(Arguments {
        raw: raw.trim().to_string(),
        values,
    })
}

fn coerce_token(param: &Parameter, token: &str) -> Result<ArgValue, String> {
    match param.kind {
        ParamKind::Word | ParamKind::Remainder => Ok(ArgValue::Text(token.to_string())),
        ParamKind::Integer => token
            .parse()
            .map(ArgValue::Integer)
            .map_err(|_| format!("`{}` expects an integer, got `{}`", param.name, token)),
        ParamKind::Decimal => token
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(ArgValue::Decimal)
            .ok_or_else(|| format!("`{}` expects a number, got `{}`", param.name, token)),
    }
}

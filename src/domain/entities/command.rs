use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use super::arguments::{coerce, Arguments, ParamKind, Parameter};
use crate::application::errors::{CommandError, RegistryError};
use crate::domain::traits::CommandHandler;

/// Module name used when a command does not declare one
pub const DEFAULT_MODULE: &str = "General";

/// Represents a bot command
#[derive(Clone)]
pub struct CommandDescriptor {
    pub name: String,
    pub aliases: Vec<String>,
    pub module: String,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    pub handler: Arc<dyn CommandHandler>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, handler: impl CommandHandler + 'static) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            module: DEFAULT_MODULE.to_string(),
            summary: None,
            parameters: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// One-line usage string, e.g. `!weather <city...>`
    pub fn usage(&self, prefix: char) -> String {
        let mut usage = format!("{}{}", prefix, self.name);
        for param in &self.parameters {
            usage.push(' ');
            usage.push_str(&param.to_string());
        }
        usage
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let invalid = |reason: &str| RegistryError::InvalidSignature {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        for key in self.keys() {
            if key.is_empty() || key.contains(char::is_whitespace) {
                return Err(invalid("names and aliases must be non-empty single words"));
            }
        }

        let mut seen_optional = false;
        for (i, param) in self.parameters.iter().enumerate() {
            if param.kind == ParamKind::Remainder && i + 1 != self.parameters.len() {
                return Err(invalid("a remainder parameter must be the last one"));
            }
            if seen_optional && !param.optional {
                return Err(invalid("required parameters cannot follow optional ones"));
            }
            seen_optional |= param.optional;
        }
        Ok(())
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("module", &self.module)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

fn normalize(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

/// Collects commands at startup. Turned into a [`CommandRegistry`] with
/// [`build`](Self::build); there is no way back.
#[derive(Default)]
pub struct CommandRegistryBuilder {
    case_sensitive: bool,
    commands: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
}

impl CommandRegistryBuilder {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            ..Self::default()
        }
    }

    pub fn register(&mut self, command: CommandDescriptor) -> Result<(), RegistryError> {
        command.validate()?;

        let keys: Vec<String> = command
            .keys()
            .map(|k| normalize(k, self.case_sensitive))
            .collect();
        for (i, key) in keys.iter().enumerate() {
            if self.index.contains_key(key) || keys[..i].contains(key) {
                return Err(RegistryError::Duplicate(key.clone()));
            }
        }

        let slot = self.commands.len();
        for key in keys {
            self.index.insert(key, slot);
        }
        tracing::debug!("Registered command: {} ({})", command.name, command.module);
        self.commands.push(command);
        Ok(())
    }

    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            case_sensitive: self.case_sensitive,
            commands: self.commands,
            index: self.index,
        }
    }
}

/// A command resolved together with its coerced arguments
#[derive(Debug)]
pub struct Resolved<'a> {
    pub command: &'a CommandDescriptor,
    pub arguments: Arguments,
}

/// Read-only set of registered commands
pub struct CommandRegistry {
    case_sensitive: bool,
    commands: Vec<CommandDescriptor>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.index
            .get(&normalize(name, self.case_sensitive))
            .map(|&slot| &self.commands[slot])
    }

    /// Look a command up by name or alias and coerce `argument_text` into its
    /// parameters
    pub fn resolve(&self, name: &str, argument_text: &str) -> Result<Resolved<'_>, CommandError> {
        let command = self.get(name).ok_or_else(|| CommandError::UnknownCommand {
            name: name.to_string(),
        })?;

        let arguments = coerce(&command.parameters, argument_text).map_err(|reason| {
            CommandError::ArgumentMismatch {
                command: command.name.clone(),
                reason,
            }
        })?;

        Ok(Resolved { command, arguments })
    }

    /// Commands grouped by module name
    pub fn modules(&self) -> BTreeMap<&str, Vec<&CommandDescriptor>> {
        let mut modules: BTreeMap<&str, Vec<&CommandDescriptor>> = BTreeMap::new();
        for cmd in &self.commands {
            modules.entry(cmd.module.as_str()).or_default().push(cmd);
        }
        modules
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messaging::InvocationContext;
    use async_trait::async_trait;

    struct Noop;

    #[async_trait]
    impl CommandHandler for Noop {
        async fn execute(
            &self,
            _ctx: &InvocationContext<'_>,
            _args: &Arguments,
        ) -> Result<(), CommandError> {
            Ok(())
        }
    }

    fn registry(case_sensitive: bool) -> CommandRegistry {
        let mut builder = CommandRegistryBuilder::new(case_sensitive);
        builder
            .register(
                CommandDescriptor::new("Weather", Noop)
                    .with_alias("w")
                    .with_module("Lookup")
                    .with_parameter(Parameter::new("city", ParamKind::Remainder)),
            )
            .unwrap();
        builder.register(CommandDescriptor::new("ping", Noop)).unwrap();
        builder.build()
    }

    #[test]
    fn resolve_is_case_insensitive_by_default() {
        let registry = registry(false);
        let resolved = registry.resolve("WEATHER", "paris").unwrap();
        assert_eq!(resolved.command.name, "Weather");
        assert_eq!(resolved.arguments.text("city"), Some("paris"));
        assert!(registry.resolve("W", "oslo").is_ok());
    }

    #[test]
    fn resolve_can_be_case_sensitive() {
        let registry = registry(true);
        assert!(registry.resolve("Weather", "paris").is_ok());
        assert!(matches!(
            registry.resolve("weather", "paris"),
            Err(CommandError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn unknown_and_mismatch_are_distinct() {
        let registry = registry(false);
        assert!(matches!(
            registry.resolve("nope", ""),
            Err(CommandError::UnknownCommand { name }) if name == "nope"
        ));
        assert!(matches!(
            registry.resolve("weather", ""),
            Err(CommandError::ArgumentMismatch { command, .. }) if command == "Weather"
        ));
    }

    #[test]
    fn duplicate_names_and_aliases_are_rejected() {
        let mut builder = CommandRegistryBuilder::new(false);
        builder.register(CommandDescriptor::new("ping", Noop)).unwrap();

        let err = builder.register(CommandDescriptor::new("PING", Noop)).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(ref name) if name == "ping"));

        let err = builder
            .register(CommandDescriptor::new("pong", Noop).with_alias("Ping"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(_)));

        let err = builder
            .register(CommandDescriptor::new("echo", Noop).with_alias("echo"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(_)));

        // failed registrations leave nothing behind
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn malformed_signatures_are_rejected() {
        let mut builder = CommandRegistryBuilder::new(false);
        let err = builder
            .register(
                CommandDescriptor::new("say", Noop)
                    .with_parameter(Parameter::new("text", ParamKind::Remainder))
                    .with_parameter(Parameter::new("times", ParamKind::Integer)),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSignature { .. }));

        let err = builder
            .register(
                CommandDescriptor::new("roll", Noop)
                    .with_parameter(Parameter::new("sides", ParamKind::Integer).optional())
                    .with_parameter(Parameter::new("count", ParamKind::Integer)),
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSignature { .. }));

        let err = builder.register(CommandDescriptor::new("two words", Noop)).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSignature { .. }));
    }

    #[test]
    fn modules_group_commands() {
        let registry = registry(false);
        let modules = registry.modules();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules["Lookup"][0].name, "Weather");
        assert_eq!(modules[DEFAULT_MODULE][0].name, "ping");
        assert_eq!(modules["Lookup"][0].usage('!'), "!Weather <city...>");
    }
}

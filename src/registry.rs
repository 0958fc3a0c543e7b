//! The registry: the catalogue of formatting backends, keyed by name.
//!
//! Callers pick a backend out of the registry by its key, ask it what
//! it can do, and build formatters from it. The built-in backends are
//! always present; embedders can register more.

use std::error;
use std::fmt;

use formatter::{Capabilities, Config, Error, Formatter, Help};
use variants::{beats, classic, tokens};


/// One entry in the registry: everything known about a backend short of
/// actually building it.
pub struct Variant {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    can: Capabilities,
    help: fn() -> Help,
    construct: fn(&Config) -> Result<Box<dyn Formatter>, Error>,
}

impl Variant {

    /// Describes a backend to the registry.
    pub fn new(key: &'static str, label: &'static str, description: &'static str,
               can: Capabilities,
               help: fn() -> Help,
               construct: fn(&Config) -> Result<Box<dyn Formatter>, Error>) -> Self {
        Self { key, label, description, can, help, construct }
    }

    /// Which configuration knobs this backend honours.
    pub fn capabilities(&self) -> Capabilities {
        self.can
    }

    /// The backend’s pattern cheat-sheet.
    pub fn help(&self) -> Help {
        (self.help)()
    }

    /// Builds a formatter from this backend and the given configuration.
    pub fn build(&self, config: &Config) -> Result<Box<dyn Formatter>, Error> {
        (self.construct)(config)
    }
}


impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Variant({:?})", self.key)
    }
}


/// The **registry** itself: an ordered list of variants, unique by key.
#[derive(Debug)]
pub struct Registry {
    variants: Vec<Variant>,
}

impl Registry {

    /// Loads the registry with the built-in backends.
    pub fn load() -> Result<Self, LoadError> {
        Self::from_variants(builtins())
    }

    /// Builds a registry from an explicit list of variants. An empty
    /// list is refused: a clock with nothing to format with is no clock.
    pub fn from_variants(variants: Vec<Variant>) -> Result<Self, LoadError> {
        if variants.is_empty() {
            Err(LoadError::NoVariants)
        }
        else {
            Ok(Self { variants })
        }
    }

    /// All the variants, in presentation order.
    pub fn as_list(&self) -> &[Variant] {
        &self.variants
    }

    /// Looks a variant up by its key.
    pub fn get(&self, key: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.key == key)
    }

    /// The cheat-sheet for the given backend, if there is one.
    pub fn help(&self, key: &str) -> Option<Help> {
        self.get(key).map(Variant::help)
    }

    /// Adds a variant, replacing any existing one with the same key but
    /// keeping its place in the order if so.
    pub fn register(&mut self, variant: Variant) {
        match self.variants.iter().position(|v| v.key == variant.key) {
            Some(index) => self.variants[index] = variant,
            None        => self.variants.push(variant),
        }
    }
}

fn builtins() -> Vec<Variant> {
    vec![
        Variant::new("classic", "Classic",
            "The original pattern engine, always on local time",
            classic::capabilities(), classic::help, classic::build),

        Variant::new("tokens", "Tokens",
            "The same engine with zone, locale, and calendar knobs",
            tokens::capabilities(), tokens::help, tokens::build),

        Variant::new("beats", "Beats",
            "Swatch Internet Time",
            beats::capabilities(), beats::help, beats::build),
    ]
}


/// How loading the registry can fail.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LoadError {

    /// Not a single backend was available.
    NoVariants,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoadError::NoVariants => write!(f, "No formatting backends are available"),
        }
    }
}

impl error::Error for LoadError {
    fn description(&self) -> &str {
        "registry error"
    }
}


#[cfg(test)]
mod test {
    pub use super::{LoadError, Registry, Variant};
    pub use formatter::{Config, Formatter};

    #[test]
    fn the_builtins_are_there() {
        let registry = Registry::load().unwrap();
        let keys: Vec<_> = registry.as_list().iter().map(|v| v.key).collect();
        assert_eq!(keys, vec![ "classic", "tokens", "beats" ]);
    }

    #[test]
    fn lookup_by_key() {
        let registry = Registry::load().unwrap();
        assert_eq!(registry.get("beats").unwrap().label, "Beats");
        assert!(registry.get("sundial").is_none());
    }

    #[test]
    fn capabilities_come_through() {
        let registry = Registry::load().unwrap();
        assert!(registry.get("tokens").unwrap().capabilities().custom_timezone);
        assert!(! registry.get("classic").unwrap().capabilities().custom_timezone);
    }

    #[test]
    fn every_backend_has_help() {
        let registry = Registry::load().unwrap();
        for variant in registry.as_list() {
            let help = registry.help(variant.key).unwrap();
            assert!(! help.left.is_empty());
            assert!(! help.link.is_empty());
        }
    }

    #[test]
    fn an_empty_registry_is_refused() {
        assert_eq!(Registry::from_variants(Vec::new()).unwrap_err(), LoadError::NoVariants);
    }

    #[test]
    fn registering_replaces_by_key() {
        use variants::beats;

        let mut registry = Registry::load().unwrap();
        registry.register(Variant::new("beats", "Beats II", "The sequel",
            beats::capabilities(), beats::help, beats::build));

        assert_eq!(registry.as_list().len(), 3);
        assert_eq!(registry.get("beats").unwrap().label, "Beats II");
    }

    #[test]
    fn built_formatters_format() {
        use instant::Instant;

        let registry = Registry::load().unwrap();
        let config = Config { timezone: Some("UTC".to_string()), .. Config::default() };

        let formatter = registry.get("tokens").unwrap().build(&config).unwrap();
        let text = formatter.format("yyyy-MM-dd", Instant::at(1_680_825_600)).unwrap();
        assert_eq!(text, "2023-04-07");
    }
}

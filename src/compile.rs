//! Compiling whole pattern strings into reusable renderers.
//!
//! A clock redraws with the same pattern once a second (or faster), so
//! the tokenizing and field resolution all happen once, up front. The
//! compiler keeps two caches: one from pattern strings to finished
//! renderers, and one from individual fields to their rendering
//! functions, shared between every pattern that mentions them.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use fields;
use fields::{Render, Stamp};
use names::Names;
use pattern::{tokenize, Token};


/// A pattern, compiled down to the list of steps that render it.
///
/// Cloning one is cheap, as the steps live behind an `Rc`; the cache
/// hands out clones freely.
#[derive(Clone)]
pub struct Renderer {
    plan: Rc<Plan>,
}

/// Most patterns are a sequence of parts, but the degenerate shapes come
/// up often enough (a pattern of pure literal text, or one lone field)
/// to deserve plans without the per-part loop.
enum Plan {
    Empty,
    Text(String),
    Single(Render),
    Sequence(Vec<Part>),
}

enum Part {
    Text(String),
    Field(Render),
}

impl Renderer {

    /// Runs the plan against a stamp, producing the formatted text.
    pub fn render(&self, stamp: &Stamp) -> String {
        match *self.plan {
            Plan::Empty                  => String::new(),
            Plan::Text(ref text)         => text.clone(),
            Plan::Single(ref field)      => field(stamp),
            Plan::Sequence(ref parts)    => {
                let mut out = String::new();
                for part in parts {
                    match *part {
                        Part::Text(ref text)    => out.push_str(text),
                        Part::Field(ref field)  => out.push_str(&field(stamp)),
                    }
                }
                out
            }
        }
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.plan {
            Plan::Empty                => write!(f, "Renderer(empty)"),
            Plan::Text(ref text)       => write!(f, "Renderer(text {:?})", text),
            Plan::Single(_)            => write!(f, "Renderer(1 field)"),
            Plan::Sequence(ref parts)  => write!(f, "Renderer({} parts)", parts.len()),
        }
    }
}


/// The pattern **compiler**, which also owns the caches.
///
/// Patterns arrive in two flavours, told apart by a leading `#`: with
/// one, the rest of the string is the pattern itself; without one, the
/// whole string names a preset (`short`, `medium`, `long`, or `full`).
/// An unmarked string that names no preset compiles to nothing, and that
/// nothing is cached too, so repeated lookups of a misspelt preset stay
/// cheap.
pub struct Compiler {
    names: Rc<Names>,
    patterns: RefCell<HashMap<String, Option<Renderer>>>,
    fields: RefCell<HashMap<(char, usize), Option<Render>>>,
}

impl Compiler {

    /// Creates a compiler that renders text fields with the given names.
    pub fn new(names: Names) -> Self {
        Self {
            names: Rc::new(names),
            patterns: RefCell::new(HashMap::new()),
            fields: RefCell::new(HashMap::new()),
        }
    }

    /// Compiles a pattern, or fetches the result of having compiled it
    /// before. `None` means the string was an unmarked non-preset.
    pub fn compile(&self, input: &str) -> Option<Renderer> {
        if let Some(hit) = self.patterns.borrow().get(input) {
            return hit.clone();
        }

        let compiled = match explicit_pattern(input) {
            Some(pattern) => Some(self.assemble(pattern)),
            None          => None,
        };

        self.patterns.borrow_mut().insert(input.to_string(), compiled.clone());
        compiled
    }

    /// Tokenizes a raw pattern and resolves its fields into a plan.
    /// Adjacent literals get merged; a letter run that resolves to no
    /// field at all is kept as literal text instead.
    fn assemble(&self, pattern: &str) -> Renderer {
        let mut parts = Vec::new();
        let mut pending = String::new();

        for token in tokenize(pattern) {
            match token {
                Token::Literal(text) => {
                    pending.push_str(text);
                }
                Token::Field { letter, width } => {
                    match self.field(letter, width) {
                        Some(rendering) => {
                            if ! pending.is_empty() {
                                parts.push(Part::Text(pending.split_off(0)));
                            }
                            parts.push(Part::Field(rendering));
                        }
                        None => {
                            for _ in 0 .. width {
                                pending.push(letter);
                            }
                        }
                    }
                }
            }
        }

        if ! pending.is_empty() {
            parts.push(Part::Text(pending));
        }

        let plan = if parts.is_empty() {
            Plan::Empty
        }
        else if parts.len() == 1 {
            match parts.remove(0) {
                Part::Text(text)    => Plan::Text(text),
                Part::Field(field)  => Plan::Single(field),
            }
        }
        else {
            Plan::Sequence(parts)
        };

        Renderer { plan: Rc::new(plan) }
    }

    /// Resolves one field, through the field cache.
    fn field(&self, letter: char, width: usize) -> Option<Render> {
        if let Some(hit) = self.fields.borrow().get(&(letter, width)) {
            return hit.clone();
        }

        let resolved = fields::resolve(letter, width, &self.names);
        self.fields.borrow_mut().insert((letter, width), resolved.clone());
        resolved
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Compiler({} patterns, {} fields cached)",
               self.patterns.borrow().len(), self.fields.borrow().len())
    }
}

/// Resolves the input down to a raw pattern: either it carries the `#`
/// mark, or it names one of the presets.
fn explicit_pattern(input: &str) -> Option<&str> {
    if let Some(rest) = input.strip_prefix('#') {
        return Some(rest);
    }

    match input {
        "" | "medium" => Some("MMM d, y, h:mm:ss a"),
        "short"       => Some("M/d/yy, h:mm a"),
        "long"        => Some("MMMM d, y, h:mm:ss a"),
        "full"        => Some("EEEE, MMMM d, y, h:mm:ss a"),
        _             => None,
    }
}

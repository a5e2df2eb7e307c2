use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;
use std::fs;
use std::path::Path;
use tracing::debug;
use crate::{ContextRef, Error, Result};
use crate::reader::{Reader, Token};


/// Substitutes every well-formed `{{key}}` of `template` in a single pass.
///
/// Values are inserted verbatim and never scanned again, keys missing from
/// the context collapse to empty text, anything else is copied unchanged.
pub fn render(template: &str, context: ContextRef) -> String {
    let mut reader = Reader::new(template);
    let mut result = String::with_capacity(template.len());
    while let Some(token) = reader.pop_front() {
        match token {
            Token::Text(text) => result.push_str(text),
            Token::Placeholder(key) => {
                if let Some(value) = context.value(key) {
                    result.push_str(&value);
                }
            }
        }
    }
    result
}


/// A template compiled once and rendered many times.
#[derive(Debug)]
pub struct Template {
    source: String,
    segments: Segments
}

impl Template {
    pub fn from(input: &str) -> Self {
        let mut reader = Reader::new(input);
        Template {
            source: input.to_owned(),
            segments: parse(&mut reader)
        }
    }

    pub fn render(&self, context: ContextRef) -> String {
        let mut result = String::with_capacity(self.source.len());
        self.segments.render(context, &mut result);
        result
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct keys in order of first use.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .filter_map(|segment| segment.key())
            .filter(|key| seen.insert(*key))
            .collect()
    }
}


fn parse(reader: &mut Reader) -> Segments {
    let mut segments = Segments::new();
    // a malformed tag is read as a separate text token, merge it back
    let mut text = String::new();
    while let Some(token) = reader.pop_front() {
        match token {
            Token::Text(t) => text.push_str(t),
            Token::Placeholder(key) => {
                if !text.is_empty() {
                    segments.push(Box::new(TextSegment::new(std::mem::take(&mut text))));
                }
                segments.push(Box::new(PlaceholderSegment::new(key)))
            }
        }
    }
    if !text.is_empty() {
        segments.push(Box::new(TextSegment::new(text)));
    }
    segments
}


trait Segment: Debug + Send + Sync {
    fn render(&self, context: ContextRef, output: &mut String);

    fn key(&self) -> Option<&str> {
        None
    }
}

type Segments = Vec<Box<dyn Segment>>;

impl Segment for Segments {
    fn render(&self, context: ContextRef, output: &mut String) {
        for child in self {
            child.render(context, output);
        }
    }
}


#[derive(Debug)]
struct TextSegment {
    text: String
}

impl TextSegment {
    fn new(text: String) -> Self {
        TextSegment { text }
    }
}

impl Segment for TextSegment {
    fn render(&self, _context: ContextRef, output: &mut String) {
        output.push_str(&self.text);
    }
}


#[derive(Debug)]
struct PlaceholderSegment {
    key: String
}

impl PlaceholderSegment {
    fn new(key: &str) -> Self {
        PlaceholderSegment {
            key: key.to_owned()
        }
    }
}

impl Segment for PlaceholderSegment {
    fn render(&self, context: ContextRef, output: &mut String) {
        if let Some(value) = context.value(&self.key) {
            output.push_str(&value);
        }
    }

    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }
}


pub trait TemplateStore {
    fn get(&self, name: &str) -> Option<&Template>;

    fn render(&self, name: &str, context: ContextRef) -> Result<String> {
        self.get(name)
            .map(|template| template.render(context))
            .ok_or_else(|| Error::TemplateNotFound(name.to_owned()))
    }
}


#[derive(Debug, Default)]
pub struct TemplateMap {
    templates: BTreeMap<String, Template>
}

impl TemplateMap {
    pub fn new() -> Self {
        TemplateMap { templates: BTreeMap::new() }
    }

    pub fn load(&mut self, name: &str, input: &str) {
        let template = Template::from(input);
        debug!(name, placeholders = template.placeholders().len(), "template loaded");
        self.templates.insert(name.to_owned(), template);
    }

    /// Reads a YAML mapping of template name to template source.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let sources = serde_yaml::from_str::<BTreeMap<String, String>>(text)?;
        let mut map = TemplateMap::new();
        for (name, source) in &sources {
            map.load(name, source);
        }
        Ok(map)
    }

    /// Loads every `*.html` file of a directory, named after the file stem.
    pub fn load_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut map = TemplateMap::new();
        for entry in fs::read_dir(path)? {
            let file = entry?.path();
            if file.extension().map_or(true, |ext| ext != "html") {
                continue;
            }
            if let Some(name) = file.file_stem().and_then(|stem| stem.to_str()) {
                let source = fs::read_to_string(&file)?;
                map.load(name, &source);
            }
        }
        debug!(dir = %path.display(), count = map.len(), "template directory loaded");
        Ok(map)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateStore for TemplateMap {
    fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }
}

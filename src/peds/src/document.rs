//! Catalog document format (XML)
//!
//! ```xml
//! <PedDatabase version="1.0" game="RDR2" total_peds="2">
//!   <Humans description="..." count="1">
//!     <Ped model="CS_dutch" name="Dutch van der Linde" type="regular"/>
//!   </Humans>
//!   <Animals description="..." count="1">
//!     <Ped model="A_C_Moose_01_Unique" name="Moose" rarity="legendary"/>
//!   </Animals>
//!   ...
//! </PedDatabase>
//! ```
//!
//! Legendary entries in the Animals category carry `rarity` instead of
//! `type`. Counts found in a document are ignored on load and recomputed.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogEntry, DEFAULT_GAME, DEFAULT_VERSION};
use crate::category::{Category, Kind};

pub const ROOT_ELEMENT: &str = "PedDatabase";
pub const PED_ELEMENT: &str = "Ped";

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Expected <PedDatabase> root, found <{0}>")]
    UnexpectedRoot(String),

    #[error("Document has no <PedDatabase> root")]
    MissingRoot,

    #[error("Unknown category element <{0}>")]
    UnknownCategory(String),

    #[error("<Ped> element outside of a category")]
    OrphanPed,

    #[error("<Ped> element is missing the {0:?} attribute")]
    MissingAttribute(&'static str),

    #[error("Invalid {attribute} value: {value:?}")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },
}

/// Serialize a catalog to an indented XML document
pub fn to_xml(catalog: &Catalog) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let total = catalog.total_count().to_string();
    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("version", catalog.version()));
    root.push_attribute(("game", catalog.game()));
    root.push_attribute(("total_peds", total.as_str()));
    writer.write_event(Event::Start(root))?;

    for category in Category::ALL {
        let count = catalog.count(category).to_string();
        let mut element = BytesStart::new(category.element_name());
        element.push_attribute(("description", category.description()));
        element.push_attribute(("count", count.as_str()));

        let entries = catalog.entries(category);
        if entries.is_empty() {
            writer.write_event(Event::Empty(element))?;
            continue;
        }

        writer.write_event(Event::Start(element))?;
        for entry in entries {
            writer.write_event(Event::Empty(ped_element(entry)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(category.element_name())))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn ped_element(entry: &CatalogEntry) -> BytesStart<'_> {
    let mut ped = BytesStart::new(PED_ELEMENT);
    ped.push_attribute(("model", entry.identifier.as_str()));
    ped.push_attribute(("name", entry.display_name.as_str()));

    if entry.category.uses_rarity_tag() && entry.kind.is_legendary() {
        ped.push_attribute(("rarity", entry.kind.as_str()));
    } else {
        ped.push_attribute(("type", entry.kind.as_str()));
    }
    ped
}

/// Parse a catalog document
pub fn from_xml(xml: &str) -> Result<Catalog, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut loader = Loader::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => loader.open(&e, true)?,
            Event::Empty(e) => loader.open(&e, false)?,
            Event::End(e) => loader.close(e.name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
    }

    loader.finish()
}

#[derive(Default)]
struct Loader {
    root: Option<(String, String)>,
    current: Option<Category>,
    entries: Vec<CatalogEntry>,
}

impl Loader {
    fn open(&mut self, element: &BytesStart<'_>, has_children: bool) -> Result<(), DocumentError> {
        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        let attrs = attributes(element)?;

        if self.root.is_none() {
            if name != ROOT_ELEMENT {
                return Err(DocumentError::UnexpectedRoot(name));
            }
            let version = attrs.get("version").map_or(DEFAULT_VERSION, String::as_str);
            let game = attrs.get("game").map_or(DEFAULT_GAME, String::as_str);
            self.root = Some((version.to_string(), game.to_string()));
            return Ok(());
        }

        if name == PED_ELEMENT {
            let category = self.current.ok_or(DocumentError::OrphanPed)?;
            self.entries.push(parse_ped(category, &attrs)?);
            return Ok(());
        }

        let category =
            Category::from_element_name(&name).ok_or(DocumentError::UnknownCategory(name))?;
        if has_children {
            self.current = Some(category);
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        if self
            .current
            .is_some_and(|c| c.element_name().as_bytes() == name)
        {
            self.current = None;
        }
    }

    fn finish(self) -> Result<Catalog, DocumentError> {
        let (version, game) = self.root.ok_or(DocumentError::MissingRoot)?;
        Ok(Catalog::from_entries(version, game, self.entries))
    }
}

fn attributes(element: &BytesStart<'_>) -> Result<HashMap<String, String>, DocumentError> {
    let mut map = HashMap::new();
    for attr in element.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        map.insert(key, value);
    }
    Ok(map)
}

fn parse_ped(
    category: Category,
    attrs: &HashMap<String, String>,
) -> Result<CatalogEntry, DocumentError> {
    let model = attrs
        .get("model")
        .ok_or(DocumentError::MissingAttribute("model"))?;
    let name = attrs
        .get("name")
        .ok_or(DocumentError::MissingAttribute("name"))?;

    let kind = match (attrs.get("type"), attrs.get("rarity")) {
        (_, Some(rarity)) => parse_kind("rarity", rarity)?,
        (Some(kind), None) => parse_kind("type", kind)?,
        (None, None) => Kind::Regular,
    };

    Ok(CatalogEntry::new(model.as_str(), name.as_str(), category, kind))
}

fn parse_kind(attribute: &'static str, value: &str) -> Result<Kind, DocumentError> {
    value.parse().map_err(|_| DocumentError::InvalidValue {
        attribute,
        value: value.to_string(),
    })
}

/// Read a catalog document from disk
pub fn load(path: &Path) -> Result<Catalog, DocumentError> {
    let xml = fs::read_to_string(path)?;
    from_xml(&xml)
}

/// Read a catalog document, or start an empty catalog if the file does not
/// exist. Any other failure is returned.
pub fn load_or_new(path: &Path) -> Result<Catalog, DocumentError> {
    match fs::read_to_string(path) {
        Ok(xml) => from_xml(&xml),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!("No catalog at {}, creating a new one", path.display());
            Ok(Catalog::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Write a catalog document atomically.
///
/// The document is written to a temporary file next to `path` and renamed
/// over it, so a failed write never leaves a truncated catalog behind.
pub fn save(catalog: &Catalog, path: &Path) -> Result<(), DocumentError> {
    let xml = to_xml(catalog)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(xml.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!("Wrote {} peds to {}", catalog.total_count(), path.display());
    Ok(())
}

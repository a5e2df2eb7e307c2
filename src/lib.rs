//! Placeholder substitution for contract and proposal templates.
//!
//! A template is plain text, usually HTML, with `{{key}}` placeholders where
//! a key is made of ASCII letters, digits and underscores. Rendering replaces
//! every placeholder with its value from a [Context] in a single pass:
//!
//! - values are inserted verbatim, without HTML escaping, and are never
//!   scanned for further placeholders,
//! - a key missing from the context renders as empty text,
//! - anything that is not a well-formed placeholder, such as `{{ key }}` or an
//!   unterminated `{{key`, is copied unchanged.
//!
//! Rendering never fails. The fallible parts of the crate are the
//! collaborators around it: a [TemplateStore] to fetch templates by name, a
//! [ContextBuilder] turning deal records into a flat [DataContext], and
//! [Settings] loaded from YAML.
//!
//!
//! # Samples
//!
//! ## Single pass
//!
//! ```
//! use std::collections::HashMap;
//! use minuta::render;
//!
//! let context = HashMap::from([
//!     ("cliente_nome", "<strong>Ana</strong>"),
//!     ("imovel_titulo", "{{cliente_nome}}"),
//! ]);
//!
//! let result = render("{{cliente_nome}}: {{imovel_titulo}} {{corretor_nome}}", &context);
//!
//! assert_eq!(result, "<strong>Ana</strong>: {{cliente_nome}} ")
//! ```
//!
//! ## Contract with co-buyers
//!
//! ```
//! use minuta::{ContextBuilder, Party, Settings, Template};
//!
//! let text = "<p>{{cliente_nome}} e {{coadquirente1_nome}}</p>{{bloco_assinaturas_compradores}}";
//! let settings = Settings {
//!     signature_block: "<p>{{nome}}</p>".to_owned(),
//!     ..Settings::default()
//! };
//! let lead = Party::named("Ana");
//! let co_buyers = vec![Party::named("Bia")];
//!
//! let context = ContextBuilder::new(&settings)
//!     .lead(&lead)
//!     .co_buyers(&co_buyers)
//!     .build();
//! let template = Template::from(text);
//!
//! let result = template.render(&context);
//! assert_eq!(result, "<p>Ana e Bia</p><p>Ana</p><p>Bia</p>");
//! ```
mod reader;
mod template;
mod context;
mod json;
mod yaml;
mod records;
mod builder;
mod settings;
mod error;
pub mod catalog;

pub use self::template::{render, Template, TemplateStore, TemplateMap};
pub use self::context::{Context, ContextRef, DataContext};
pub use self::json::JsonValue;
pub use self::yaml::YamlValue;
pub use self::records::{Fields, Party, Broker, Property, PaymentPlan, Installment};
pub use self::builder::{
    ContextBuilder, build_co_buyer_context,
    CO_BUYER_BLOCK, SIGNATURE_BLOCK, INSTALLMENT_BLOCK, CO_BUYER_COUNT, INSTALLMENT_COUNT
};
pub use self::settings::Settings;
pub use self::error::{Error, Result};

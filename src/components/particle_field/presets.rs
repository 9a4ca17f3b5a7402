//! Page identities and their particle presets.

use serde::Deserialize;

use super::error::FieldError;

/// Default particle count when none (or zero) is given.
pub const DEFAULT_PARTICLE_COUNT: usize = 100;
/// Default palette when no colours are given.
pub const DEFAULT_COLORS: &[&str] = &["#6366f1"];

/// Construction options for a particle field.
///
/// Mirrors the JS-facing shape `{ colors, particleCount }`. Missing, `null`
/// or empty colours select the indigo default; a missing, `null` or zero
/// count selects 100 particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawOptions")]
pub struct ParticleOptions {
	/// CSS hex colours particles are drawn from.
	pub colors: Vec<String>,
	/// Upper bound on the particle count; the viewport width caps it further.
	pub particle_count: usize,
}

/// Options as they arrive over the wire, before defaults are applied.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawOptions {
	colors: Option<Vec<String>>,
	particle_count: Option<usize>,
}

impl From<RawOptions> for ParticleOptions {
	fn from(raw: RawOptions) -> Self {
		Self::normalized(raw.colors.unwrap_or_default(), raw.particle_count.unwrap_or(0))
	}
}

impl Default for ParticleOptions {
	fn default() -> Self {
		Self::new(DEFAULT_COLORS, DEFAULT_PARTICLE_COUNT)
	}
}

impl ParticleOptions {
	/// Build options, applying the same defaults as the JSON form.
	pub fn new(colors: &[&str], particle_count: usize) -> Self {
		Self::normalized(colors.iter().map(|c| c.to_string()).collect(), particle_count)
	}

	fn normalized(mut colors: Vec<String>, mut particle_count: usize) -> Self {
		if colors.is_empty() {
			colors = DEFAULT_COLORS.iter().map(|c| c.to_string()).collect();
		}
		if particle_count == 0 {
			particle_count = DEFAULT_PARTICLE_COUNT;
		}
		Self {
			colors,
			particle_count,
		}
	}

	/// Parse options from a JSON document such as `{"particleCount": 40}`.
	pub fn from_json(json: &str) -> Result<Self, FieldError> {
		serde_json::from_str(json).map_err(|e| FieldError::InvalidOptions(e.to_string()))
	}
}

/// The page a script instance is running on, read from `<body data-page>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PageKind {
	/// Landing page; also any unrecognised tag.
	#[default]
	Home,
	/// Python portfolio (`python`).
	Python,
	/// Web portfolio (`web`).
	Web,
	/// Project listing (`proyectos`).
	Projects,
	/// Contact page (`contacto`).
	Contact,
}

impl PageKind {
	/// Map a `data-page` tag to a page; unknown or missing tags are the home page.
	pub fn from_tag(tag: Option<&str>) -> Self {
		match tag.map(str::trim) {
			Some("python") => Self::Python,
			Some("web") => Self::Web,
			Some("proyectos") => Self::Projects,
			Some("contacto") => Self::Contact,
			_ => Self::Home,
		}
	}

	/// Read the page kind from the current document body.
	pub fn from_document() -> Self {
		let tag = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
			.and_then(|b| b.dataset().get("page"));
		Self::from_tag(tag.as_deref())
	}

	/// The `data-page` tag for this page.
	pub fn tag(self) -> &'static str {
		match self {
			Self::Home => "default",
			Self::Python => "python",
			Self::Web => "web",
			Self::Projects => "proyectos",
			Self::Contact => "contacto",
		}
	}

	/// Particle preset for this page.
	pub fn preset(self) -> ParticleOptions {
		match self {
			Self::Python => ParticleOptions::new(&["#3776ab", "#ffd43b"], 70),
			Self::Web => ParticleOptions::new(
				&["#e44d26", "#1572b6", "#f7df1e", "#ff6b35", "#61dafb"],
				80,
			),
			Self::Projects => ParticleOptions::new(&["#6366f1", "#8b5cf6"], 60),
			Self::Contact => ParticleOptions::new(&["#6366f1"], 80),
			Self::Home => ParticleOptions::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_keys_use_defaults() {
		let opts = ParticleOptions::from_json("{}").unwrap();
		assert_eq!(opts, ParticleOptions::default());
		assert_eq!(opts.colors, vec!["#6366f1".to_string()]);
		assert_eq!(opts.particle_count, 100);
	}

	#[test]
	fn camel_case_keys_are_read() {
		let opts =
			ParticleOptions::from_json(r##"{"colors": ["#111111"], "particleCount": 10}"##).unwrap();
		assert_eq!(opts, ParticleOptions::new(&["#111111"], 10));
	}

	#[test]
	fn zero_count_falls_back_to_default() {
		let opts = ParticleOptions::from_json(r#"{"particleCount": 0}"#).unwrap();
		assert_eq!(opts.particle_count, 100);
		assert_eq!(ParticleOptions::new(&["#111111"], 0).particle_count, 100);
	}

	#[test]
	fn null_and_empty_colours_fall_back_to_indigo() {
		let opts =
			ParticleOptions::from_json(r#"{"colors": null, "particleCount": 10}"#).unwrap();
		assert_eq!(opts, ParticleOptions::new(&["#6366f1"], 10));

		let opts = ParticleOptions::from_json(r#"{"colors": [], "particleCount": null}"#).unwrap();
		assert_eq!(opts, ParticleOptions::default());
	}

	#[test]
	fn malformed_json_is_an_options_error() {
		let err = ParticleOptions::from_json(r#"{"particleCount": -4}"#).unwrap_err();
		assert!(matches!(err, FieldError::InvalidOptions(_)));
	}

	#[test]
	fn tags_map_to_pages() {
		assert_eq!(PageKind::from_tag(Some("python")), PageKind::Python);
		assert_eq!(PageKind::from_tag(Some("web")), PageKind::Web);
		assert_eq!(PageKind::from_tag(Some("proyectos")), PageKind::Projects);
		assert_eq!(PageKind::from_tag(Some("contacto")), PageKind::Contact);
		assert_eq!(PageKind::from_tag(Some("blog")), PageKind::Home);
		assert_eq!(PageKind::from_tag(None), PageKind::Home);
	}

	#[test]
	fn preset_table() {
		let cases = [
			(PageKind::Python, 2, 70),
			(PageKind::Web, 5, 80),
			(PageKind::Projects, 2, 60),
			(PageKind::Contact, 1, 80),
			(PageKind::Home, 1, 100),
		];
		for (page, colors, count) in cases {
			let preset = page.preset();
			assert_eq!(preset.colors.len(), colors, "{}", page.tag());
			assert_eq!(preset.particle_count, count, "{}", page.tag());
		}
	}
}

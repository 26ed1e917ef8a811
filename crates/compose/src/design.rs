use folio_catalog::ColorSchemeCatalog;
use folio_types::{ColorTokens, Design, Purpose, Typography};

/// Scheme used for purposes outside the known set.
pub const DEFAULT_SCHEME: &str = "Finance Blue";

pub fn scheme_name(purpose: &str) -> &'static str {
    match purpose.parse::<Purpose>() {
        Ok(Purpose::Executive) => "Executive Gray",
        Ok(Purpose::Analyst) => "Analyst Orange",
        Ok(Purpose::Dashboard) => "Tech Purple",
        Ok(Purpose::Storytelling) => "Growth Green",
        Ok(Purpose::Comparison) => DEFAULT_SCHEME,
        Err(_) => DEFAULT_SCHEME,
    }
}

pub struct DesignSelector<'c> {
    schemes: &'c ColorSchemeCatalog,
}

impl<'c> DesignSelector<'c> {
    pub fn new(schemes: &'c ColorSchemeCatalog) -> Self {
        Self { schemes }
    }

    /// Resolves the purpose's scheme. A scheme missing from the catalog falls
    /// back to the catalog's first scheme, then to [`ColorTokens::NEUTRAL`].
    ///
    /// `style` is carried through as a label and does not affect colors.
    pub fn select(&self, purpose: &str, style: &str) -> Design {
        let wanted = scheme_name(purpose);
        let resolved = self
            .schemes
            .get(wanted)
            .map(|scheme| (wanted, scheme))
            .or_else(|| self.schemes.first());

        let (colors, scheme_name) = match resolved {
            Some((name, scheme)) => (scheme.tokens(), Some(name.to_string())),
            None => (ColorTokens::NEUTRAL, None),
        };
        log::debug!("Selected color scheme {:?} for purpose '{}'", scheme_name, purpose);

        Design {
            colors,
            typography: Typography::default(),
            style_name: style.to_string(),
            scheme_name,
        }
    }
}

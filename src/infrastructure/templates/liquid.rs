//! Liquid template renderer

use crate::domain::entities::TemplateData;
use crate::domain::ports::{TemplateError, TemplateRenderer};

/// Renders templates with the Liquid engine
///
/// Liquid rejects undefined variables, so a template that references a
/// field outside [`TemplateData`] fails instead of rendering blank.
pub struct LiquidRenderer {
    parser: liquid::Parser,
}

impl LiquidRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| TemplateError::Parse {
                name: "<parser>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }
}

impl TemplateRenderer for LiquidRenderer {
    fn render(
        &self,
        name: &str,
        source: &str,
        data: &TemplateData,
    ) -> Result<String, TemplateError> {
        let template = self.parser.parse(source).map_err(|e| TemplateError::Parse {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        let globals = liquid::to_object(data).map_err(|e| TemplateError::Render {
            name: name.to_string(),
            message: e.to_string(),
        })?;

        template.render(&globals).map_err(|e| TemplateError::Render {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Bullet,
    Arrow,
    Skip,
    Scan,
    Package,
    File,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Skip) => theme::icons::SKIP,
            (true, Icon::Scan) => theme::icons::SCAN,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (true, Icon::File) => theme::icons::FILE,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Skip) => theme::icons_ascii::SKIP,
            (false, Icon::Scan) => theme::icons_ascii::SCAN,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
            (false, Icon::File) => theme::icons_ascii::FILE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Skip => theme::colors::WARNING,
            Icon::Bullet | Icon::Arrow => theme::colors::DIM,
            Icon::Scan | Icon::Package | Icon::File => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

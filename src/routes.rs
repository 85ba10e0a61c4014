use crate::assets::BasePath;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    About,
    Contact,
    Projects,
    Resume,
    NotFound,
}

impl Route {
    /// Resolves a location path. The static export writes every page with a
    /// trailing slash, so `/about` and `/about/` are the same page.
    pub fn from_path(base: &BasePath, path: &str) -> Self {
        let Some(local) = base.strip(path) else {
            return Self::NotFound;
        };

        let local = local.trim_end_matches("index.html").trim_matches('/');
        match local {
            "" => Self::Home,
            "about" => Self::About,
            "contact" => Self::Contact,
            "projects" => Self::Projects,
            "resume" => Self::Resume,
            _ => Self::NotFound,
        }
    }

    pub fn segment(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Projects => "projects",
            Self::Resume => "resume",
        }
    }

    pub fn href(self, base: &BasePath) -> String {
        match self.segment() {
            "" => base.asset("/"),
            segment => base.asset(&format!("/{segment}/")),
        }
    }
}

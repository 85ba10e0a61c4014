//! UI language selection, its single persisted key, and the string tables
//! every page renders from.
//!
//! Each page reads the stored preference on its own when it mounts. There is
//! no process-wide language state and no subscription to storage changes made
//! by other open views; the last write wins.

pub const LANGUAGE_KEY: &str = "lang";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    En,
    Ua,
    Pl,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ua, Language::Pl];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ua => "ua",
            Self::Pl => "pl",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Self::En),
            "ua" => Some(Self::Ua),
            "pl" => Some(Self::Pl),
            _ => None,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Ua => "🇺🇦",
            Self::Pl => "🇵🇱",
        }
    }

    pub fn switch_label(self) -> String {
        format!("Switch language to {}", self.code().to_ascii_uppercase())
    }
}

/// Key-value storage that outlives a page view.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), &'static str>;
}

/// Missing or unrecognised values resolve to English.
pub fn load_language(store: &impl PreferenceStore) -> Language {
    store
        .read(LANGUAGE_KEY)
        .and_then(|value| Language::from_code(&value))
        .unwrap_or_default()
}

pub fn save_language(store: &impl PreferenceStore, language: Language) -> Result<(), &'static str> {
    store.write(LANGUAGE_KEY, language.code())
}

pub struct ProjectCopy {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct TimelineCopy {
    pub year: &'static str,
    pub text: &'static str,
}

pub struct Strings {
    pub back: &'static str,
    pub language_group: &'static str,

    pub home_title: &'static str,
    pub home_tagline: &'static str,
    pub nav_projects: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
    pub nav_resume: &'static str,
    pub avatar_alt: &'static str,

    pub about_title: &'static str,
    pub about_body: &'static str,
    pub about_gallery_title: &'static str,

    pub gallery_prev: &'static str,
    pub gallery_next: &'static str,
    pub gallery_open: &'static str,
    pub gallery_close: &'static str,
    pub gallery_go_to: &'static str,
    pub gallery_dialog: &'static str,

    pub contact_title: &'static str,
    pub contact_intro: &'static str,

    pub projects_title: &'static str,
    pub projects_intro: &'static str,
    pub projects_detail: &'static str,
    pub projects_outro: &'static str,
    pub project_link: &'static str,
    pub project_cards: [ProjectCopy; 4],

    pub resume_title: &'static str,
    pub summary_title: &'static str,
    pub summary: &'static str,
    pub tags_title: &'static str,
    pub download_title: &'static str,
    pub download_hint: &'static str,
    pub cv_en: &'static str,
    pub cv_pl: &'static str,
    pub timeline_title: &'static str,
    pub timeline: [TimelineCopy; 3],
    pub skills_title: &'static str,
    pub contact_cta: &'static str,

    pub not_found: &'static str,
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Ua => &UA,
        Language::Pl => &PL,
    }
}

pub static EN: Strings = Strings {
    back: "Back to Orbit",
    language_group: "Language",

    home_title: "NeoOrbit Hub",
    home_tagline: "Welcome to my interactive portfolio, a space where ideas orbit around creativity and code. Explore projects, skills, and more.",
    nav_projects: "Projects",
    nav_about: "About",
    nav_contact: "Contact",
    nav_resume: "Resume",
    avatar_alt: "Yaroslav Mudryk",

    about_title: "About Me",
    about_body: "Hi! I'm Yaroslav Mudryk, a computer science student at Vistula University in Warsaw, passionate about Python, AI, and creative web development.",
    about_gallery_title: "Snapshots",

    gallery_prev: "Previous photo",
    gallery_next: "Next photo",
    gallery_open: "Open photo gallery",
    gallery_close: "Close gallery",
    gallery_go_to: "Go to photo",
    gallery_dialog: "Photo gallery",

    contact_title: "Contact",
    contact_intro: "Get in touch via email:",

    projects_title: "Projects",
    projects_intro: "This section presents a selection of my academic and personal projects that combine artificial intelligence, data processing, and web development.",
    projects_detail: "Each project was designed to explore practical applications of Python, machine learning frameworks, and modern web technologies such as Flask, FastAPI, and Tailwind CSS.",
    projects_outro: "Together, they demonstrate my interest in connecting scientific methods with creative coding to develop intelligent, efficient, and user-friendly digital tools.",
    project_link: "View on GitHub →",
    project_cards: [
        ProjectCopy {
            title: "ClientBook CRM",
            description: "A mini CRM system built with Flask + PostgreSQL that allows adding and searching clients.",
        },
        ProjectCopy {
            title: "OCR Tool",
            description: "Python + Flask application using Tesseract for automatic text recognition from images with export support.",
        },
        ProjectCopy {
            title: "Kickboxing Champion Portfolio",
            description: "A responsive personal website built with HTML, CSS, and GSAP animations for a world kickboxing champion.",
        },
        ProjectCopy {
            title: "Traffic Sign Recognition (in development)",
            description: "A convolutional neural network trained on the GTSRB dataset to classify road signs, built with TensorFlow, Keras, NumPy, and Pandas. Backend integration planned with Flask or FastAPI.",
        },
    ],

    resume_title: "Resume",
    summary_title: "Quick Summary",
    summary: "I'm a computer science student passionate about artificial intelligence and software that solves real problems. In 2025, I worked remotely at GLP Software, where I helped the team with web and testing tasks, from building small school websites in HTML/CSS/JS to designing and improving layouts for commercial clients. I enjoy combining logic and creativity: automating things with Python and Flask, experimenting with AI tools, and learning how technology can make everyday life simpler.",
    tags_title: "Tech Highlights",
    download_title: "Download CV",
    download_hint: "Prefer a classic PDF? Grab it here:",
    cv_en: "Download English CV",
    cv_pl: "Pobierz CV (PL)",
    timeline_title: "Timeline of Growth",
    timeline: [
        TimelineCopy {
            year: "2025",
            text: "Traffic Sign Recognition (CNN on GTSRB), OCR Tool improvements, NeoOrbit portfolio.",
        },
        TimelineCopy {
            year: "2025",
            text: "Remote at GLP Software: school websites (HTML/CSS/JS), commercial kickboxer portfolio, bug hunting, basic UI design.",
        },
        TimelineCopy {
            year: "2022–Present",
            text: "Vistula University (CS, AI track). Coursework, team projects, and academic writing.",
        },
    ],
    skills_title: "Skills Galaxy",
    contact_cta: "Need more details? Visit the Projects page or contact me.",

    not_found: "This orbit is empty.",
};

pub static UA: Strings = Strings {
    back: "Назад в Орбіту",
    language_group: "Мова",

    home_title: "NeoOrbit Hub",
    home_tagline: "Ласкаво просимо до мого інтерактивного портфоліо, простору, де ідеї обертаються навколо творчості та коду. Переглядайте проєкти, навички та більше.",
    nav_projects: "Проєкти",
    nav_about: "Про мене",
    nav_contact: "Контакти",
    nav_resume: "Резюме",
    avatar_alt: "Ярослав Мудрик",

    about_title: "Про мене",
    about_body: "Привіт! Я Ярослав Мудрик, студент комп'ютерних наук в Університеті Вісла у Варшаві. Захоплююся Python, штучним інтелектом і креативною веб-розробкою.",
    about_gallery_title: "Моменти",

    gallery_prev: "Попереднє фото",
    gallery_next: "Наступне фото",
    gallery_open: "Відкрити галерею",
    gallery_close: "Закрити галерею",
    gallery_go_to: "Перейти до фото",
    gallery_dialog: "Фотогалерея",

    contact_title: "Контакти",
    contact_intro: "Напишіть мені на пошту:",

    projects_title: "Проєкти",
    projects_intro: "Тут зібрані мої навчальні та особисті проєкти, що поєднують штучний інтелект, обробку даних і веб-розробку.",
    projects_detail: "Кожен проєкт досліджує практичне застосування Python, фреймворків машинного навчання та сучасних веб-технологій, таких як Flask, FastAPI і Tailwind CSS.",
    projects_outro: "Разом вони показують мій інтерес до поєднання наукових методів із творчим програмуванням для створення розумних, ефективних і зручних цифрових інструментів.",
    project_link: "Переглянути на GitHub →",
    project_cards: [
        ProjectCopy {
            title: "ClientBook CRM",
            description: "Міні-CRM на Flask + PostgreSQL для додавання та пошуку клієнтів.",
        },
        ProjectCopy {
            title: "OCR Tool",
            description: "Застосунок на Python + Flask, що використовує Tesseract для автоматичного розпізнавання тексту з зображень з можливістю експорту.",
        },
        ProjectCopy {
            title: "Портфоліо чемпіона з кікбоксингу",
            description: "Адаптивний персональний сайт на HTML, CSS та анімаціях GSAP для чемпіона світу з кікбоксингу.",
        },
        ProjectCopy {
            title: "Розпізнавання дорожніх знаків (у розробці)",
            description: "Згорткова нейронна мережа, навчена на наборі GTSRB, для класифікації дорожніх знаків. TensorFlow, Keras, NumPy і Pandas. Планується бекенд на Flask або FastAPI.",
        },
    ],

    resume_title: "Резюме",
    summary_title: "Коротко про мене",
    summary: "Я студент комп'ютерних наук, якому справді цікаво поєднувати штучний інтелект і розробку корисних програм. У 2025 році я дистанційно працював у GLP Software, де допомагав команді з веб-розробкою та тестуванням: створював сайти для шкіл на HTML/CSS/JS, розробляв макети для комерційних клієнтів. Мені подобається поєднувати логіку та креативність: автоматизувати процеси за допомогою Python і Flask, працювати з AI і робити технології простими для людей.",
    tags_title: "Технології",
    download_title: "Завантажити CV",
    download_hint: "Потрібна класична PDF-версія? Ось тут:",
    cv_en: "Завантажити CV англійською",
    cv_pl: "Pobierz CV (PL)",
    timeline_title: "Орбітальна хронологія",
    timeline: [
        TimelineCopy {
            year: "2025",
            text: "Розпізнавання дорожніх знаків (CNN на GTSRB), покращення OCR Tool, NeoOrbit-портфоліо.",
        },
        TimelineCopy {
            year: "2025",
            text: "Дистанційно в GLP Software: шкільні сайти (HTML/CSS/JS), комерційне портфоліо кікбоксера, пошук багів, базовий UI-дизайн.",
        },
        TimelineCopy {
            year: "2022–дотепер",
            text: "Vistula University (CS, напрям AI). Курсові, командні проєкти та академічне письмо.",
        },
    ],
    skills_title: "Галактика навичок",
    contact_cta: "Потрібно більше деталей? Перегляньте Projects або напишіть мені.",

    not_found: "Ця орбіта порожня.",
};

pub static PL: Strings = Strings {
    back: "Powrót do Orbity",
    language_group: "Język",

    home_title: "NeoOrbit Hub",
    home_tagline: "Witaj w moim interaktywnym portfolio, przestrzeni, w której pomysły krążą wokół kreatywności i kodu. Odkryj projekty, umiejętności i więcej.",
    nav_projects: "Projekty",
    nav_about: "O mnie",
    nav_contact: "Kontakt",
    nav_resume: "CV",
    avatar_alt: "Jarosław Mudryk",

    about_title: "O mnie",
    about_body: "Cześć! Jestem Jarosław Mudryk, student informatyki na Uniwersytecie Vistula w Warszawie. Pasjonuję się Pythonem, sztuczną inteligencją i kreatywnym tworzeniem stron.",
    about_gallery_title: "Migawki",

    gallery_prev: "Poprzednie zdjęcie",
    gallery_next: "Następne zdjęcie",
    gallery_open: "Otwórz galerię",
    gallery_close: "Zamknij galerię",
    gallery_go_to: "Przejdź do zdjęcia",
    gallery_dialog: "Galeria zdjęć",

    contact_title: "Kontakt",
    contact_intro: "Napisz do mnie:",

    projects_title: "Projekty",
    projects_intro: "Ta sekcja przedstawia wybrane projekty akademickie i osobiste, które łączą sztuczną inteligencję, przetwarzanie danych i tworzenie stron.",
    projects_detail: "Każdy projekt bada praktyczne zastosowania Pythona, frameworków uczenia maszynowego i nowoczesnych technologii webowych, takich jak Flask, FastAPI i Tailwind CSS.",
    projects_outro: "Razem pokazują moje zainteresowanie łączeniem metod naukowych z kreatywnym programowaniem, aby tworzyć inteligentne, wydajne i przyjazne narzędzia cyfrowe.",
    project_link: "Zobacz na GitHubie →",
    project_cards: [
        ProjectCopy {
            title: "ClientBook CRM",
            description: "Mini system CRM na Flask + PostgreSQL do dodawania i wyszukiwania klientów.",
        },
        ProjectCopy {
            title: "OCR Tool",
            description: "Aplikacja w Pythonie + Flask korzystająca z Tesseract do automatycznego rozpoznawania tekstu z obrazów z możliwością eksportu.",
        },
        ProjectCopy {
            title: "Portfolio mistrza kickboxingu",
            description: "Responsywna strona osobista w HTML, CSS i animacjach GSAP dla mistrza świata w kickboxingu.",
        },
        ProjectCopy {
            title: "Rozpoznawanie znaków drogowych (w trakcie)",
            description: "Konwolucyjna sieć neuronowa wytrenowana na zbiorze GTSRB do klasyfikacji znaków drogowych. TensorFlow, Keras, NumPy i Pandas. Planowany backend we Flask lub FastAPI.",
        },
    ],

    resume_title: "CV",
    summary_title: "Krótko o mnie",
    summary: "Jestem studentem informatyki, pasjonuję się sztuczną inteligencją i tworzeniem oprogramowania, które naprawdę pomaga. W 2025 roku pracowałem zdalnie w GLP Software, gdzie wspierałem zespół w zadaniach webowych i testowych: budowałem szkolne strony w HTML/CSS/JS i projektowałem układy dla klientów komercyjnych. Lubię łączyć logikę z kreatywnością: automatyzować procesy w Pythonie i Flasku, eksperymentować z AI i odkrywać, jak technologia może ułatwiać codzienność.",
    tags_title: "Technologie",
    download_title: "Pobierz CV",
    download_hint: "Wolisz klasyczny PDF? Tutaj:",
    cv_en: "Pobierz CV (EN)",
    cv_pl: "Pobierz CV (PL)",
    timeline_title: "Oś czasu rozwoju",
    timeline: [
        TimelineCopy {
            year: "2025",
            text: "Rozpoznawanie znaków drogowych (CNN na GTSRB), ulepszenia OCR Tool, portfolio NeoOrbit.",
        },
        TimelineCopy {
            year: "2025",
            text: "Zdalnie w GLP Software: strony szkolne (HTML/CSS/JS), komercyjne portfolio kickboksera, bug hunting, podstawowy UI design.",
        },
        TimelineCopy {
            year: "2022–obecnie",
            text: "Vistula University (CS, ścieżka AI). Projekty zespołowe i prace zaliczeniowe.",
        },
    ],
    skills_title: "Galaktyka umiejętności",
    contact_cta: "Potrzebujesz więcej szczegółów? Zobacz Projects lub skontaktuj się.",

    not_found: "Ta orbita jest pusta.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
            if self.read_only {
                return Err("storage is read-only");
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_preference_defaults_to_english() {
        assert_eq!(load_language(&MemoryStore::default()), Language::En);
    }

    #[test]
    fn unrecognised_preference_defaults_to_english() {
        let store = MemoryStore::default();
        for value in ["fr", "", "UA", " pl"] {
            store.write(LANGUAGE_KEY, value).expect("writable");
            assert_eq!(load_language(&store), Language::En, "value {value:?}");
        }
    }

    #[test]
    fn saved_choice_survives_a_fresh_load() {
        let store = MemoryStore::default();
        save_language(&store, Language::Ua).expect("writable");

        assert_eq!(store.read(LANGUAGE_KEY).as_deref(), Some("ua"));
        assert_eq!(load_language(&store), Language::Ua);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::default();
        save_language(&store, Language::Pl).expect("writable");
        save_language(&store, Language::Ua).expect("writable");
        assert_eq!(load_language(&store), Language::Ua);
    }

    #[test]
    fn failed_write_is_reported() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        assert!(save_language(&store, Language::Pl).is_err());
        assert_eq!(load_language(&store), Language::En);
    }

    #[test]
    fn codes_round_trip_for_every_language() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::Ua.switch_label(), "Switch language to UA");
    }

    #[test]
    fn switching_changes_visible_copy() {
        assert_eq!(strings(Language::En).back, "Back to Orbit");
        assert_eq!(strings(Language::Ua).back, "Назад в Орбіту");
        assert_eq!(strings(Language::Pl).back, "Powrót do Orbity");
        assert_ne!(strings(Language::En).summary, strings(Language::Ua).summary);
    }
}

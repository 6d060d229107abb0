/// One entry in the skills section. `icon` is a devicon class; skills without
/// one are drawn as their initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Option<&'static str>,
}

impl Skill {
    const fn new(name: &'static str, icon: &'static str) -> Self {
        Self {
            name,
            icon: Some(icon),
        }
    }

    const fn plain(name: &'static str) -> Self {
        Self { name, icon: None }
    }

    /// Badge text shown in place of a missing icon.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        skills: &[
            Skill::new("Rust", "devicon-rust-original"),
            Skill::new("TypeScript", "devicon-typescript-plain"),
            Skill::new("Go", "devicon-go-original-wordmark"),
            Skill::new("Python", "devicon-python-plain"),
            Skill::new("SQL", "devicon-azuresqldatabase-plain"),
        ],
    },
    SkillCategory {
        title: "Web",
        skills: &[
            Skill::new("React", "devicon-react-original"),
            Skill::plain("Leptos"),
            Skill::new("WebAssembly", "devicon-wasm-original"),
            Skill::plain("Axum"),
            Skill::new("Tailwind", "devicon-tailwindcss-original"),
        ],
    },
    SkillCategory {
        title: "Data & Tooling",
        skills: &[
            Skill::new("PostgreSQL", "devicon-postgresql-plain"),
            Skill::new("Redis", "devicon-redis-plain"),
            Skill::new("SQLite", "devicon-sqlite-plain"),
            Skill::new("Docker", "devicon-docker-plain"),
            Skill::new("Nix", "devicon-nixos-plain"),
            Skill::new("GitHub Actions", "devicon-githubactions-plain"),
            Skill::plain("Playwright"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_fallback() {
        assert_eq!(Skill::plain("leptos").initial(), "L");
        assert_eq!(Skill::plain("").initial(), "");
    }

    #[test]
    fn test_icons_are_devicon_classes() {
        for skill in SKILL_CATEGORIES.iter().flat_map(|c| c.skills) {
            if let Some(icon) = skill.icon {
                assert!(icon.starts_with("devicon-"), "{} has icon {icon}", skill.name);
            }
        }
    }

    #[test]
    fn test_categories_not_empty() {
        assert!(!SKILL_CATEGORIES.is_empty());
        for c in SKILL_CATEGORIES {
            assert!(!c.skills.is_empty(), "{} has no skills", c.title);
        }
    }
}

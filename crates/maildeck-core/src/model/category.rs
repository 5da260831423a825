//! The fixed category taxonomy shared by emails, tasks, and documents.

/// Classification tag applied to every email, task, and document.
///
/// The set is closed: entities always carry exactly one of these eight
/// tags, with [`Category::Misc`] as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Government agencies and statutory boards.
    Government,
    /// Banking and personal finance.
    Finance,
    /// Bills and utilities.
    Bills,
    /// Clinics, hospitals, and health screenings.
    Healthcare,
    /// Schools and courses.
    Education,
    /// Insurance policies and premiums.
    Insurance,
    /// Employment and HR matters.
    Employment,
    /// Everything else.
    #[default]
    Misc,
}

impl Category {
    /// All tags in dashboard display order.
    pub const ALL: [Self; 8] = [
        Self::Government,
        Self::Finance,
        Self::Bills,
        Self::Healthcare,
        Self::Education,
        Self::Insurance,
        Self::Employment,
        Self::Misc,
    ];

    /// Stable tag string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::Finance => "finance",
            Self::Bills => "bills",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Insurance => "insurance",
            Self::Employment => "employment",
            Self::Misc => "misc",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Government => "Government",
            Self::Finance => "Finance",
            Self::Bills => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Insurance => "Insurance",
            Self::Employment => "Employment",
            Self::Misc => "Miscellaneous",
        }
    }

    /// Icon name for this category.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Government => "building-2",
            Self::Finance => "landmark",
            Self::Bills => "receipt",
            Self::Healthcare => "heart",
            Self::Education => "graduation-cap",
            Self::Insurance => "shield",
            Self::Employment => "briefcase",
            Self::Misc => "more-horizontal",
        }
    }

    /// Accent color for this category.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Government => "hsl(234 70% 55%)",
            Self::Finance => "hsl(152 55% 42%)",
            Self::Bills => "hsl(38 85% 52%)",
            Self::Healthcare => "hsl(340 70% 55%)",
            Self::Education => "hsl(270 60% 55%)",
            Self::Insurance => "hsl(200 70% 50%)",
            Self::Employment => "hsl(24 80% 52%)",
            Self::Misc => "hsl(220 20% 55%)",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived per-category aggregate over the active email list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCount {
    /// Category this aggregate covers.
    pub category: Category,
    /// Active emails in the category.
    pub count: usize,
    /// Active unread emails in the category.
    pub unread: usize,
}

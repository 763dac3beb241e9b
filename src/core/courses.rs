//! # Course Marketplace
//!
//! Sample courses shown on the home and explore screens, the syllabus shown
//! on course detail, and the short quiz attached to the video player. Loaded
//! once from `assets/courses.json`.

use serde::{Deserialize, Serialize};

use crate::core::catalog::{CatalogError, Exercise};

const BUILTIN_COURSES: &str = include_str!("../../assets/courses.json");

/// Category name that matches every course.
pub const ALL_CATEGORIES: &str = "Todos";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub rating: f32,
    pub students: u32,
    pub duration: String,
    pub price: String,
    pub level: String,
    /// Percent complete for courses the user has started.
    #[serde(default)]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    pub course_count: Option<u32>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseLesson {
    pub title: String,
    pub duration: String,
    pub completed: bool,
    pub free: bool,
}

impl CourseLesson {
    pub fn is_playable(&self) -> bool {
        self.free || self.completed
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseCatalog {
    pub categories: Vec<Category>,
    pub courses: Vec<Course>,
    pub syllabus: Vec<CourseLesson>,
    pub lesson_quiz: Exercise,
}

impl CourseCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(CatalogError::Parse)
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_COURSES)
    }

    pub fn find(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Category chips for the explore screen, with "Todos" first.
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(|c| c.name.as_str()))
            .collect()
    }

    pub fn featured_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.featured)
    }

    /// Case-insensitive match on title or instructor, narrowed by category.
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<&Course> {
        let needle = query.trim().to_lowercase();
        self.courses
            .iter()
            .filter(|course| {
                needle.is_empty()
                    || course.title.to_lowercase().contains(&needle)
                    || course.instructor.to_lowercase().contains(&needle)
            })
            .filter(|course| match category {
                None => true,
                Some(ALL_CATEGORIES) => true,
                Some(name) => course.category == name,
            })
            .collect()
    }

    pub fn in_progress(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.progress.is_some()).collect()
    }

    /// Highest rated first; ties keep catalog order.
    pub fn popular(&self, limit: usize) -> Vec<&Course> {
        let mut courses: Vec<&Course> = self.courses.iter().collect();
        courses.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        courses.truncate(limit);
        courses
    }

    pub fn first_free_lesson(&self) -> Option<usize> {
        self.syllabus.iter().position(|l| l.free)
    }

    /// Percent of the shared syllabus already completed.
    pub fn syllabus_progress(&self) -> u16 {
        if self.syllabus.is_empty() {
            return 0;
        }
        let done = self.syllabus.iter().filter(|l| l.completed).count();
        ((done * 100) / self.syllabus.len()) as u16
    }
}

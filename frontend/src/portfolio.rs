use std::fmt;

/// Display category of a portfolio project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    UiUx,
    AppDev,
    WebDev,
}

impl Category {
    /// Order in which the gallery lists its categories.
    pub const ALL: [Category; 3] = [Category::UiUx, Category::AppDev, Category::WebDev];

    pub fn label(self) -> &'static str {
        match self {
            Category::UiUx => "UI/UX",
            Category::AppDev => "App Dev",
            Category::WebDev => "Web Dev",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub category: Category,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

/// Projects of one category, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub projects: Vec<&'a Project>,
}

/// Splits `projects` into one group per entry of `categories`, keeping the
/// requested category order and the relative order of projects inside each
/// group. Categories without projects produce an empty group.
///
/// `categories` is expected to hold each category at most once.
pub fn group_by_category<'a>(projects: &'a [Project], categories: &[Category]) -> Vec<CategoryGroup<'a>> {
    categories
        .iter()
        .map(|&category| CategoryGroup {
            category,
            projects: projects.iter().filter(|project| project.category == category).collect(),
        })
        .collect()
}

/// The project currently shown in the detail modal, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Selection<'a> {
    selected: Option<&'a Project>,
}

impl<'a> Selection<'a> {
    pub fn select(&mut self, project: &'a Project) {
        self.selected = Some(project);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'a Project> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use proptest::prelude::*;

    fn project(id: u32, category: Category) -> Project {
        Project {
            id,
            title: "title",
            description: "description",
            image: "/images/project.jpg",
            link: "https://example.com",
            category,
        }
    }

    fn category_strategy() -> impl Strategy<Value = Category> {
        prop_oneof![Just(Category::UiUx), Just(Category::AppDev), Just(Category::WebDev)]
    }

    #[test]
    fn sample_projects_split_two_per_category() {
        let groups = group_by_category(&PROJECTS, &Category::ALL);
        let sizes: Vec<usize> = groups.iter().map(|group| group.projects.len()).collect();
        assert_eq!(sizes, vec![2, 2, 2]);
        assert_eq!(groups[0].category, Category::UiUx);
        assert_eq!(groups[1].category, Category::AppDev);
        assert_eq!(groups[2].category, Category::WebDev);
    }

    #[test]
    fn groups_follow_requested_category_order() {
        let order = [Category::WebDev, Category::UiUx, Category::AppDev];
        let groups = group_by_category(&PROJECTS, &order);
        let categories: Vec<Category> = groups.iter().map(|group| group.category).collect();
        assert_eq!(categories, order.to_vec());
    }

    #[test]
    fn category_without_projects_yields_empty_group() {
        let projects = vec![project(1, Category::UiUx)];
        let groups = group_by_category(&projects, &Category::ALL);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].projects.len(), 1);
        assert!(groups[1].projects.is_empty());
        assert!(groups[2].projects.is_empty());
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(Category::UiUx.to_string(), "UI/UX");
        assert_eq!(Category::AppDev.to_string(), "App Dev");
        assert_eq!(Category::WebDev.to_string(), "Web Dev");
    }

    #[test]
    fn new_selection_is_closed() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn select_then_clear() {
        let mut selection = Selection::default();
        selection.select(&PROJECTS[2]);
        assert_eq!(selection.selected(), Some(&PROJECTS[2]));
        assert!(selection.is_open());

        selection.clear();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_open());
    }

    #[test]
    fn select_is_idempotent() {
        let mut once = Selection::default();
        once.select(&PROJECTS[0]);

        let mut twice = Selection::default();
        twice.select(&PROJECTS[0]);
        twice.select(&PROJECTS[0]);

        assert_eq!(once, twice);
    }

    #[test]
    fn selecting_another_project_replaces_the_first() {
        let mut selection = Selection::default();
        selection.select(&PROJECTS[0]);
        selection.select(&PROJECTS[5]);
        assert_eq!(selection.selected().map(|p| p.id), Some(6));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut selection = Selection::default();
        selection.select(&PROJECTS[1]);
        selection.clear();
        selection.clear();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn selection_leaves_project_list_untouched() {
        let before = PROJECTS.to_vec();
        let mut selection = Selection::default();
        selection.select(&PROJECTS[3]);
        selection.clear();
        assert_eq!(PROJECTS.to_vec(), before);
    }

    proptest! {
        #[test]
        fn every_project_lands_in_exactly_its_own_group(
            categories in prop::collection::vec(category_strategy(), 0..40)
        ) {
            let projects: Vec<Project> = categories
                .iter()
                .enumerate()
                .map(|(i, &category)| project(i as u32, category))
                .collect();
            let groups = group_by_category(&projects, &Category::ALL);

            let total: usize = groups.iter().map(|group| group.projects.len()).sum();
            prop_assert_eq!(total, projects.len());

            for p in &projects {
                for group in &groups {
                    let hits = group.projects.iter().filter(|q| q.id == p.id).count();
                    let expected = usize::from(group.category == p.category);
                    prop_assert_eq!(hits, expected);
                }
            }
        }

        #[test]
        fn grouping_preserves_source_order(
            categories in prop::collection::vec(category_strategy(), 0..40)
        ) {
            let projects: Vec<Project> = categories
                .iter()
                .enumerate()
                .map(|(i, &category)| project(i as u32, category))
                .collect();

            for group in group_by_category(&projects, &Category::ALL) {
                let ids: Vec<u32> = group.projects.iter().map(|p| p.id).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable();
                prop_assert_eq!(ids, sorted);
            }
        }
    }
}

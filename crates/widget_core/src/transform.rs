use shared::domain::{CategorizedPets, Gender, PersonRecord};

/// Derives the per-gender cat name lists from a feed.
///
/// `None` means the fetch produced no data at all; that signal propagates
/// untouched. Records with an unclassified gender are dropped entirely, and
/// only pets whose type is exactly `Cat` contribute a name. The output always
/// carries both lists, in feed order.
pub fn categorize(records: Option<&[PersonRecord]>) -> Option<CategorizedPets> {
    let records = records?;

    let mut categorized = CategorizedPets::default();
    for record in records {
        let Some(gender) = Gender::parse(&record.gender) else {
            continue;
        };
        let names = record
            .pets
            .iter()
            .flatten()
            .filter(|pet| pet.kind == "Cat")
            .map(|pet| pet.name.clone());
        match gender {
            Gender::Male => categorized.male.extend(names),
            Gender::Female => categorized.female.extend(names),
        }
    }

    Some(categorized)
}

/// Alphabetizes both name lists. The ordering is byte-lexicographic and the
/// sort is stable; empty lists pass through.
pub fn sort_by_name(categorized: Option<CategorizedPets>) -> Option<CategorizedPets> {
    let mut categorized = categorized?;
    categorized.male.sort();
    categorized.female.sort();
    Some(categorized)
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;

use crate::cli::{BrowseArgs, CompletionArgs, RecommendArgs};
use crate::infra::directory_service;
use chrono::Local;
use std::fmt::Write as _;
use venture_directory::config::AppConfig;
use venture_directory::error::AppError;
use venture_directory::{
    Catalog, DirectoryPage, DirectoryServiceError, EntityKind, Listing, ProfileView,
};

pub(crate) fn run_kinds() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = directory_service(&config.directory)?;

    println!("Directories");
    for kind in EntityKind::ALL {
        let summary = Catalog::summary(kind);
        println!(
            "- {} ({}): {} records, {} per page",
            summary.label,
            kind,
            service.catalog().len(kind),
            summary.page_size
        );
        println!("    filters: {}", summary.facets.join(", "));
        println!("    flags:   {}", summary.flags.join(", "));
        println!("    sort by: {}", summary.sort_keys.join(", "));
    }
    Ok(())
}

pub(crate) fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = directory_service(&config.directory)?;

    let query = args.query();
    let page = service.browse(args.kind, &query)?;
    print!("{}", render_page(args.kind, &page));
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = directory_service(&config.directory)?;

    let records = service.recommended(args.kind, args.limit);
    println!("Recommended {}", args.kind.label());
    if records.is_empty() {
        println!("  (nothing to recommend yet)");
    }
    for (rank, listing) in records.iter().enumerate() {
        println!("{:>3}. {}", rank + 1, listing_line(listing));
    }
    Ok(())
}

pub(crate) fn run_completion(args: CompletionArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = directory_service(&config.directory)?;

    let raw = std::fs::read_to_string(&args.draft)?;
    let fields: serde_json::Value = serde_json::from_str(&raw).map_err(|err| {
        DirectoryServiceError::InvalidDraft(format!("{}: {err}", args.draft.display()))
    })?;

    let view = service.save_profile(args.kind, fields)?;
    print!("{}", render_completion(&view));
    Ok(())
}

pub(crate) fn render_page(kind: EntityKind, page: &DirectoryPage<Listing>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: page {} of {} ({} matches)",
        kind.label(),
        page.page,
        page.total_pages,
        page.total_matches
    );
    if page.items.is_empty() {
        let _ = writeln!(out, "  No results. Try clearing filters or the search term.");
    }
    for listing in &page.items {
        let _ = writeln!(out, "- {}", listing_line(listing));
    }
    out
}

fn listing_line(listing: &Listing) -> String {
    let mut line = format!("{} [{}]", listing.name(), listing.id());
    let headline = listing.headline();
    let headline = headline.trim_matches(|c: char| c == '·' || c.is_whitespace());
    if !headline.is_empty() {
        let _ = write!(line, " {}", headline);
    }
    if !listing.location().is_empty() {
        let _ = write!(line, " | {}", listing.location());
    }
    if let Some(rating) = listing.rating() {
        let _ = write!(line, " | rating {:.1}", rating);
    }
    line
}

pub(crate) fn render_completion(view: &ProfileView) -> String {
    let completion = &view.completion;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} profile: {}% complete ({}/{} required, {}/{} recommended)",
        view.kind.label(),
        completion.percent,
        completion.required_filled,
        completion.required_total,
        completion.recommended_filled,
        completion.recommended_total
    );

    for section in completion.sections() {
        let _ = writeln!(out, "{}", section.section);
        for field in section.fields {
            let mark = if field.filled { "x" } else { " " };
            let required = if field.required { " *" } else { "" };
            let _ = writeln!(out, "  [{}] {}{}", mark, field.label, required);
        }
    }

    let missing: Vec<&str> = completion
        .missing_required()
        .iter()
        .map(|field| field.label)
        .collect();
    if missing.is_empty() {
        let _ = writeln!(out, "All required fields are filled in.");
    } else {
        let _ = writeln!(out, "Missing required: {}", missing.join(", "));
    }
    let _ = writeln!(
        out,
        "Listed in directory: {} (checked {})",
        if view.listed { "yes" } else { "no" },
        view.draft
            .updated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryProfileStore;
    use serde_json::json;
    use std::sync::Arc;
    use venture_directory::{DirectoryQuery, DirectoryService};

    fn service() -> DirectoryService<InMemoryProfileStore> {
        let catalog = Catalog::bundled().expect("bundled catalog parses");
        DirectoryService::new(
            Arc::new(catalog),
            Arc::new(InMemoryProfileStore::default()),
            3,
        )
    }

    #[test]
    fn page_lists_names_ids_and_ratings() {
        let service = service();
        let page = service
            .browse(EntityKind::Investors, &DirectoryQuery::new().search("fin"))
            .expect("browse");

        let rendered = render_page(EntityKind::Investors, &page);
        assert!(rendered.starts_with("Investors: page 1 of 1 (2 matches)"));
        assert!(rendered.contains("- Golden Gate Ventures [inv-001] Venture Capital · Fintech, Marketplaces | Singapore | rating 4.8"));
        assert!(rendered.contains("Jane Capital [inv-003]"));
    }

    #[test]
    fn empty_page_suggests_clearing_filters() {
        let service = service();
        let page = service
            .browse(
                EntityKind::Teachers,
                &DirectoryQuery::new().search("astrophysics"),
            )
            .expect("browse");

        let rendered = render_page(EntityKind::Teachers, &page);
        assert!(rendered.contains("page 1 of 1 (0 matches)"));
        assert!(rendered.contains("No results."));
    }

    #[test]
    fn completion_checklist_marks_missing_required_fields() {
        let service = service();
        let view = service
            .save_profile(
                EntityKind::Agencies,
                json!({ "id": "my-agency", "name": "Coastal Trade Office", "level": "State" }),
            )
            .expect("draft saved");

        let rendered = render_completion(&view);
        assert!(rendered.starts_with("Government Agencies profile: 22% complete (2/4 required, 0/5 recommended)"));
        assert!(rendered.contains("  [x] Agency name *"));
        assert!(rendered.contains("  [ ] Agency type *"));
        assert!(rendered.contains("Missing required: Agency type, Mandate"));
        assert!(rendered.contains("Listed in directory: yes"));
    }
}

//! CSV overrides for the bundled directory data.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use venture_directory::catalog::import::read_csv;
use venture_directory::catalog::{Mentor, Startup};
use venture_directory::{Catalog, CatalogError, DirectoryQuery, EntityKind};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "venture-directory-{name}-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn read_csv_splits_list_columns_and_leaves_blanks_empty() {
    let csv = "\
id,name,title,expertise,languages,sessions,hourly_rate,available,verified
m-1, Ada Lovelace ,Advisor,Product;Fundraising,,12,,true,false
m-2,Grace Hopper,Engineer,Compilers,English,,95.5,false,true
";
    let mentors: Vec<Mentor> = read_csv(Cursor::new(csv)).expect("csv parses");

    assert_eq!(mentors.len(), 2);
    assert_eq!(mentors[0].name, "Ada Lovelace");
    assert_eq!(mentors[0].expertise, vec!["Product", "Fundraising"]);
    assert!(mentors[0].languages.is_empty());
    assert_eq!(mentors[0].sessions, Some(12));
    assert_eq!(mentors[0].hourly_rate, None);
    assert_eq!(mentors[1].hourly_rate, Some(95.5));
    assert!(mentors[1].verified);
}

#[test]
fn read_csv_rejects_rows_without_an_id_column() {
    let csv = "name,industry\nOrphan,Fintech\n";
    let result: Result<Vec<Startup>, _> = read_csv(Cursor::new(csv));
    assert!(result.is_err());
}

#[test]
fn load_replaces_only_kinds_with_a_csv() {
    let dir = scratch_dir("override");
    fs::write(
        dir.join("startups.csv"),
        "id,name,industry,featured,verified,hiring\n\
         csv-1,Imported One,Fintech,true,false,false\n\
         csv-2,Imported Two,Climate,false,false,true\n",
    )
    .expect("write csv");

    let catalog = Catalog::load(Some(&dir)).expect("catalog loads");
    let bundled = Catalog::bundled().expect("bundled catalog parses");

    assert_eq!(catalog.len(EntityKind::Startups), 2);
    assert_eq!(catalog.investors, bundled.investors);

    let page = catalog.browse(
        EntityKind::Startups,
        &DirectoryQuery::new().flag("hiring", true),
        None,
    );
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id(), "csv-2");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_without_directory_returns_bundled_data() {
    let catalog = Catalog::load(None).expect("catalog loads");
    assert_eq!(catalog, Catalog::bundled().expect("bundled catalog parses"));
}

#[test]
fn duplicate_ids_in_csv_are_rejected() {
    let dir = scratch_dir("duplicates");
    fs::write(
        dir.join("teachers.csv"),
        "id,name\nt-1,First\nt-1,Second\n",
    )
    .expect("write csv");

    let err = Catalog::load(Some(&dir)).expect_err("duplicate ids fail");
    assert!(matches!(
        err,
        CatalogError::DuplicateId { kind: EntityKind::Teachers, ref id } if id == "t-1"
    ));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn malformed_csv_reports_the_offending_file() {
    let dir = scratch_dir("malformed");
    fs::write(
        dir.join("agencies.csv"),
        "id,name,active_programs\nag-1,Office,many\n",
    )
    .expect("write csv");

    let err = Catalog::load(Some(&dir)).expect_err("bad number fails");
    assert!(matches!(err, CatalogError::Csv { kind: EntityKind::Agencies, .. }));
    assert!(err.to_string().contains("agencies.csv"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn nan_ratings_load_and_rank_as_zero() {
    let dir = scratch_dir("nan-ratings");
    let mut csv = String::from("id,name,rating,featured\n");
    for index in 0..30 {
        let rating = if index % 3 == 0 {
            "NaN".to_string()
        } else {
            format!("{}.5", index % 5)
        };
        csv.push_str(&format!("inv-{index:02},Fund {index:02},{rating},true\n"));
    }
    fs::write(dir.join("investors.csv"), csv).expect("write csv");

    let catalog = Catalog::load(Some(&dir)).expect("NaN is a readable number");
    assert!(catalog.investors[0].rating.is_some_and(f64::is_nan));

    let page = catalog.browse(
        EntityKind::Investors,
        &DirectoryQuery::new().sort_by("rating", None),
        None,
    );
    assert_eq!(page.total_matches, 30);
    assert_eq!(page.items[0].id(), "inv-04");

    let recommended = catalog.recommend(EntityKind::Investors, 30);
    assert_eq!(recommended.len(), 30);
    assert_eq!(recommended[29].id(), "inv-27");

    fs::remove_dir_all(&dir).ok();
}

// Sanity checks over the static content tables the pages render from.

use folio_core::catalog::{book_by_id, BOOKS, SITE, TEACHING_RESOURCES};

#[test]
fn shelf_is_populated() {
    assert!(!BOOKS.is_empty());
    for book in BOOKS {
        assert!(!book.id.is_empty());
        assert!(!book.title.is_empty());
        assert!(!book.author.is_empty());
    }
}

#[test]
fn book_ids_are_unique() {
    for (i, a) in BOOKS.iter().enumerate() {
        for b in &BOOKS[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate book id {}", a.id);
        }
    }
}

#[test]
fn cover_paths_live_under_the_books_root() {
    for book in BOOKS {
        assert!(
            book.cover_image.starts_with("/books/"),
            "{} has cover path {}",
            book.title,
            book.cover_image
        );
    }
}

#[test]
fn external_links_are_absolute() {
    for book in BOOKS {
        if let Some(link) = book.link {
            assert!(link.starts_with("https://"), "{}", link);
        }
    }
    for resource in TEACHING_RESOURCES {
        assert!(resource.video_url.starts_with("https://"));
        for l in resource.links {
            assert!(l.url.starts_with("https://"), "{}", l.url);
        }
    }
}

#[test]
fn book_lookup_by_id() {
    let first = &BOOKS[0];
    let found = book_by_id(first.id).expect("first book should resolve");
    assert_eq!(found.title, first.title);

    assert!(book_by_id("no-such-id").is_none());
}

#[test]
fn nav_covers_the_three_pages() {
    let hrefs: Vec<&str> = SITE.nav.iter().map(|n| n.href).collect();
    assert_eq!(hrefs, vec!["/", "/teaching", "/books"]);
}

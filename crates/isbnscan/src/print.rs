use colored::Colorize;
use isbnscanapp::api::{CmdMessage, MessageLevel};
use isbnscanapp::model::{BookRecord, ScanRecord};

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_scans(scans: &[ScanRecord], long: bool) {
    for (i, scan) in scans.iter().enumerate() {
        let title = scan
            .book
            .as_ref()
            .and_then(|b| b.title.as_deref())
            .unwrap_or("(no details)");
        println!(
            "{:>3}. {}  {}",
            i + 1,
            scan.isbn.yellow(),
            title.bold()
        );
        if long {
            if let Some(book) = &scan.book {
                print_book_details(book, "       ");
            }
        }
    }
}

pub(crate) fn print_book(isbn: &str, book: Option<&BookRecord>) {
    match book {
        None => println!("{} {}", isbn.yellow(), "No book found for this ISBN.".dimmed()),
        Some(book) => {
            println!(
                "{} {}",
                isbn.yellow(),
                book.title.as_deref().unwrap_or("(untitled)").bold()
            );
            println!("--------------------------------");
            print_book_details(book, "");
        }
    }
}

fn print_book_details(book: &BookRecord, indent: &str) {
    let line = |label: &str, value: String| {
        println!("{}{} {}", indent, format!("{}:", label).dimmed(), value);
    };

    if let Some(authors) = book.authors.as_ref().filter(|a| !a.is_empty()) {
        line("Authors", authors.join(", "));
    }
    if let Some(publisher) = &book.publisher {
        line("Publisher", publisher.clone());
    }
    if let Some(date) = &book.published_date {
        line("Published", date.clone());
    }
    if let Some(pages) = &book.page_count {
        line("Pages", pages.to_string());
    }
    if let Some(categories) = book.categories.as_ref().filter(|c| !c.is_empty()) {
        line("Categories", categories.join(", "));
    }
    if let Some(thumbnail) = &book.thumbnail {
        line("Cover", thumbnail.clone());
    }
    if let Some(link) = &book.buy_link {
        line("Link", link.clone());
    }
    if let Some(description) = &book.description {
        println!();
        println!("{}{}", indent, description);
    }
}

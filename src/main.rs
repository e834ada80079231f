use srcref::{Diagnostic, ErrorId, Location, Severity, Source, extraction};

fn main() {
    let source = Source::new(
        "input",
        "fn double(x) { return x * 2 }\nlet result = double(\"four\");\n",
    );
    let diagnostic = Diagnostic::new(Severity::Error, "Invalid argument type.")
        .at(Location::new(&source, 50..56))
        .related(
            "The function is declared here.",
            Location::new(&source, 3..9),
        )
        .with_id(ErrorId(2271));
    println!("{:#?}", extraction::extract(&diagnostic));
}

pub mod html_formatter;
pub mod xml_formatter;

pub use html_formatter::HtmlReportFormatter;
pub use xml_formatter::XmlReportFormatter;

pub mod corpus_loader;

pub use corpus_loader::{list_article_files, list_article_folders, load_corpus, ArticleFolder};

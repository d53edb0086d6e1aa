pub mod new_article;

pub mod line_tokenizer;
pub mod tokenized_line;

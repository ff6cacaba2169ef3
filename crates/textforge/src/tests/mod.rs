mod buffer;
mod indent;
mod writer;

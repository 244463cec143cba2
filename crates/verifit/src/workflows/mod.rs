pub mod big5;

mod fixtures;

mod nested;
mod truncation;

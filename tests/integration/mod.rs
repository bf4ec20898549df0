mod canvas_encoding;
mod export;
mod trajectory;

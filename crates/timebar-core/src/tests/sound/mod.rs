mod catalog;
mod player;

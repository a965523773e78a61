mod ticker;

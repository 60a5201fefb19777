mod hello;

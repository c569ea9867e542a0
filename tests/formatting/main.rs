mod golden;
mod template;

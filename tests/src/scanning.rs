mod bulk;
mod range;
mod site;

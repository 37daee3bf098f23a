pub mod a025_docbuilder;

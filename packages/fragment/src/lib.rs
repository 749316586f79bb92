pub mod fragment;


pub use fragment::Fragment;

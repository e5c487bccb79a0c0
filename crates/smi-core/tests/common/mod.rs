pub mod sitemap_dir;

//! Shell pipelines that capture each category

use aptdiff_core::Category;

/// The command whose output is stored for `category`
pub fn live_query(category: Category) -> &'static str {
    match category {
        Category::Selections => "dpkg --get-selections",
        Category::Seldetails => r"dpkg -l | grep -P '^\w+ '",
        Category::Selversions => "dpkg-query -W",
        Category::Obsconffiles => r"dpkg-query -W -f='${Conffiles}\n' | grep -P ' obsolete$'",
        Category::Autos => "apt-mark showauto",
        Category::Manuals => "apt-mark showmanual",
        Category::Holds => "apt-mark showhold",
    }
}

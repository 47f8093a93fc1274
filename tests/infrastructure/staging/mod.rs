mod temp_staging_area_test;
